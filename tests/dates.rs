use chrono::{Duration, FixedOffset, TimeZone, Utc};
use github_info_widget::dates::{
    day_ordinal, elapsed, format_date, format_date_with, relative_time, MonthIndex, TimeUnit,
};

#[test]
fn test_day_ordinal_same_day() {
    let morning = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let night = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
    assert_eq!(day_ordinal(&morning), day_ordinal(&night));
}

#[test]
fn test_day_ordinal_consecutive_days() {
    let pairs = [
        ((2024, 2, 28), (2024, 2, 29)),
        ((2024, 2, 29), (2024, 3, 1)),
        ((2023, 2, 28), (2023, 3, 1)),
        ((2023, 12, 31), (2024, 1, 1)),
        ((2024, 4, 30), (2024, 5, 1)),
    ];

    for ((y1, m1, d1), (y2, m2, d2)) in pairs {
        let a = Utc.with_ymd_and_hms(y1, m1, d1, 23, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(y2, m2, d2, 1, 0, 0).unwrap();
        assert_eq!(day_ordinal(&b) - day_ordinal(&a), 1, "{:?} -> {:?}", a, b);
    }
}

#[test]
fn test_day_ordinal_uses_own_time_zone() {
    let utc = Utc.with_ymd_and_hms(2024, 6, 15, 23, 30, 0).unwrap();
    let plus_two = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
    assert_eq!(day_ordinal(&plus_two) - day_ordinal(&utc), 1);
}

#[test]
fn test_relative_time_whole_days() {
    let later = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    assert_eq!(relative_time(&(later - Duration::days(1)), &later), "1 day ago");
    for k in 2..7 {
        let earlier = later - Duration::days(k);
        assert_eq!(relative_time(&earlier, &later), format!("{} days ago", k));
    }
}

#[test]
fn test_relative_time_weeks() {
    let later = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    assert_eq!(relative_time(&(later - Duration::days(7)), &later), "1 week ago");
    assert_eq!(relative_time(&(later - Duration::days(13)), &later), "1 week ago");
    assert_eq!(relative_time(&(later - Duration::days(14)), &later), "2 weeks ago");
}

#[test]
fn test_relative_time_months() {
    let earlier = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

    let one_month = Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap();
    assert_eq!(relative_time(&earlier, &one_month), "1 month ago");

    // the second month is not complete until March 15th at noon
    let almost_two = Utc.with_ymd_and_hms(2024, 3, 15, 11, 59, 59).unwrap();
    assert_eq!(relative_time(&earlier, &almost_two), "1 month ago");

    let five_months = Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap();
    assert_eq!(relative_time(&earlier, &five_months), "5 months ago");
}

#[test]
fn test_relative_time_short_month_is_weeks() {
    let earlier = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
    assert_eq!(relative_time(&earlier, &later), "4 weeks ago");
}

#[test]
fn test_relative_time_prefers_coarsest_unit() {
    let earlier = Utc.with_ymd_and_hms(2021, 3, 5, 10, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    assert_eq!(relative_time(&earlier, &later), "3 years ago");

    let exactly_one = Utc.with_ymd_and_hms(2022, 3, 5, 10, 0, 0).unwrap();
    assert_eq!(relative_time(&earlier, &exactly_one), "1 year ago");
}

#[test]
fn test_relative_time_across_year_boundary() {
    let earlier = Utc.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(relative_time(&earlier, &later), "1 day ago");
}

#[test]
fn test_relative_time_sub_day_units() {
    let later = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    assert_eq!(relative_time(&(later - Duration::hours(3)), &later), "3 hours ago");
    assert_eq!(relative_time(&(later - Duration::hours(1)), &later), "1 hour ago");
    assert_eq!(relative_time(&(later - Duration::seconds(90)), &later), "1 minute ago");
    assert_eq!(relative_time(&(later - Duration::minutes(59)), &later), "59 minutes ago");
    assert_eq!(relative_time(&(later - Duration::seconds(45)), &later), "45 seconds ago");
    assert_eq!(relative_time(&(later - Duration::seconds(1)), &later), "1 second ago");
}

#[test]
fn test_relative_time_same_instant() {
    let t = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    assert_eq!(relative_time(&t, &t), "0 seconds ago");
    assert_eq!(elapsed(&t, &t), github_info_widget::dates::Elapsed { count: 0, unit: TimeUnit::Second });
}

#[test]
fn test_relative_time_clamps_reversed_order() {
    let earlier = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let later = earlier + Duration::days(400);

    let result = elapsed(&later, &earlier);
    assert_eq!(result.count, 0);
    assert_eq!(result.unit, TimeUnit::Second);
    assert_eq!(relative_time(&later, &earlier), "0 seconds ago");
}

#[test]
fn test_format_date() {
    let date = Utc.with_ymd_and_hms(2021, 3, 5, 10, 0, 0).unwrap();
    assert_eq!(format_date(&date), "2021.03.05");

    let december = Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap();
    assert_eq!(format_date(&december), "2020.12.31");
}

#[test]
fn test_format_date_zero_based_month() {
    let date = Utc.with_ymd_and_hms(2021, 3, 5, 10, 0, 0).unwrap();
    assert_eq!(format_date_with(&date, MonthIndex::ZeroBased), "2021.02.05");

    let january = Utc.with_ymd_and_hms(2021, 1, 9, 0, 0, 0).unwrap();
    assert_eq!(format_date_with(&january, MonthIndex::ZeroBased), "2021.00.09");
}

#[test]
fn test_format_date_uses_own_time_zone() {
    let utc = Utc.with_ymd_and_hms(2021, 3, 5, 23, 0, 0).unwrap();
    let plus_two = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
    assert_eq!(format_date(&plus_two), "2021.03.06");
}
