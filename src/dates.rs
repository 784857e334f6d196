use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maps the calendar date of `date`, in its own time zone, to a day count.
///
/// Two instants on the same calendar day share an ordinal and consecutive days
/// differ by exactly one, so subtracting ordinals yields whole calendar days.
pub fn day_ordinal<Tz: TimeZone>(date: &DateTime<Tz>) -> i64 {
    i64::from(date.date_naive().num_days_from_ce())
}

/// Units reported by [`relative_time`], coarsest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Week => "week",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }
}

/// Time elapsed between two instants, expressed in its coarsest nonzero unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub count: i64,
    pub unit: TimeUnit,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{} {}{} ago", self.count, self.unit.as_str(), plural)
    }
}

/// Computes the elapsed time from `earlier` to `later`.
///
/// Years and months count whole calendar months, so a month is only reached
/// once both the day of month and the time of day come around again. Weeks are
/// whole elapsed days divided by seven. A negative span clamps to zero seconds.
pub fn elapsed<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> Elapsed {
    let span = later.clone().signed_duration_since(earlier.clone());
    if span.num_seconds() <= 0 {
        return Elapsed { count: 0, unit: TimeUnit::Second };
    }

    let months = whole_months(&earlier.naive_local(), &later.naive_local());
    let candidates = [
        (months / 12, TimeUnit::Year),
        (months, TimeUnit::Month),
        (span.num_weeks(), TimeUnit::Week),
        (span.num_days(), TimeUnit::Day),
        (span.num_hours(), TimeUnit::Hour),
        (span.num_minutes(), TimeUnit::Minute),
    ];

    candidates
        .into_iter()
        .find(|(count, _)| *count > 0)
        .map(|(count, unit)| Elapsed { count, unit })
        .unwrap_or(Elapsed { count: span.num_seconds(), unit: TimeUnit::Second })
}

/// Human readable span between two instants, e.g. `"3 months ago"`
pub fn relative_time<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> String {
    elapsed(earlier, later).to_string()
}

fn whole_months(earlier: &NaiveDateTime, later: &NaiveDateTime) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());

    // the last month only counts once its day and time have come around
    let later_in_month = (later.day(), later.num_seconds_from_midnight(), later.nanosecond());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight(), earlier.nanosecond());
    if later_in_month < earlier_in_month {
        months -= 1;
    }

    months.max(0)
}

/// How the month component is printed by [`format_date_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthIndex {
    /// Calendar month, January = 01
    #[default]
    OneBased,
    /// Legacy widget output, January = 00
    ZeroBased,
}

/// Formats a date as `YYYY.MM.DD`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format_date_with(date, MonthIndex::OneBased)
}

pub fn format_date_with<Tz: TimeZone>(date: &DateTime<Tz>, month_index: MonthIndex) -> String {
    let local = date.naive_local();
    let month = match month_index {
        MonthIndex::OneBased => local.month(),
        MonthIndex::ZeroBased => local.month0(),
    };
    format!("{}.{:02}.{:02}", local.year(), month, local.day())
}
