use crate::dates::MonthIndex;
use crate::error::{Result, WidgetError};
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

pub const DEFAULT_USERNAME: &str = "jquery";
pub const DEFAULT_REPOSITORY: &str = "jquery";
pub const DEFAULT_TIMESPAN_DAYS: usize = 30;
/// Upper bound on the sparkline window; one bucket is allocated per day
pub const MAX_TIMESPAN_DAYS: usize = 366;

/// Time zone whose calendar days define "today" for bucketing and date display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayZone {
    Fixed(FixedOffset),
    /// The system zone, resolved separately for every instant so that
    /// timestamps on either side of a DST change land on their own local day
    Local,
}

impl Default for DayZone {
    fn default() -> Self {
        DayZone::Fixed(Utc.fix())
    }
}

impl DayZone {
    pub fn localize(&self, at: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            DayZone::Fixed(offset) => at.with_timezone(offset),
            DayZone::Local => {
                let offset = Local.offset_from_utc_datetime(&at.naive_utc());
                at.with_timezone(&offset)
            }
        }
    }
}

/// Options a widget instance is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    pub username: String,
    pub repository: String,
    /// Length of the commit sparkline window, in days
    pub timespan_days: usize,
    /// Show absolute `YYYY.MM.DD` dates next to the relative ones
    pub show_dates: bool,
    pub tiny_avatars: bool,
    pub month_index: MonthIndex,
    pub zone: DayZone,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            timespan_days: DEFAULT_TIMESPAN_DAYS,
            show_dates: false,
            tiny_avatars: false,
            month_index: MonthIndex::OneBased,
            zone: DayZone::default(),
        }
    }
}

impl WidgetSettings {
    pub fn new(username: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            repository: repository.into(),
            ..Default::default()
        }
    }

    pub fn with_timespan(mut self, days: usize) -> Self {
        self.timespan_days = days;
        self
    }

    pub fn with_show_dates(mut self, show_dates: bool) -> Self {
        self.show_dates = show_dates;
        self
    }

    pub fn with_tiny_avatars(mut self, tiny_avatars: bool) -> Self {
        self.tiny_avatars = tiny_avatars;
        self
    }

    pub fn with_month_index(mut self, month_index: MonthIndex) -> Self {
        self.month_index = month_index;
        self
    }

    pub fn with_zone(mut self, zone: DayZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_utc_offset(self, offset: FixedOffset) -> Self {
        self.with_zone(DayZone::Fixed(offset))
    }

    /// `owner/name` as used in API paths
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.username, self.repository)
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(WidgetError::InvalidSettings("username must not be empty".to_string()));
        }
        if self.repository.trim().is_empty() {
            return Err(WidgetError::InvalidSettings("repository must not be empty".to_string()));
        }
        if self.username.contains('/') || self.repository.contains('/') {
            return Err(WidgetError::InvalidSettings(format!(
                "username and repository must not contain '/': {}",
                self.full_name()
            )));
        }
        if self.timespan_days == 0 {
            return Err(WidgetError::InvalidSettings("timespan must be at least one day".to_string()));
        }
        if self.timespan_days > MAX_TIMESPAN_DAYS {
            return Err(WidgetError::InvalidSettings(format!(
                "timespan must be at most {} days, got {}",
                MAX_TIMESPAN_DAYS, self.timespan_days
            )));
        }
        Ok(())
    }
}
