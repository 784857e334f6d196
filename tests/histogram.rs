mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{days_before, now};
use github_info_widget::CommitHistogram;

#[test]
fn test_single_commit_today() {
    let today = now();
    let histogram = CommitHistogram::build([today], 30, &today);

    assert_eq!(histogram.len(), 30);
    assert_eq!(histogram.total(), 1);
    assert_eq!(histogram.buckets()[29], 1);
    assert_eq!(histogram.days_ago(0), Some(1));
}

#[test]
fn test_commits_older_than_window() {
    let today = now();
    let commits = [days_before(today, 30), days_before(today, 45), days_before(today, 400)];
    let histogram = CommitHistogram::build(&commits, 30, &today);

    assert_eq!(histogram.buckets(), vec![0u32; 30].as_slice());
    assert_eq!(histogram.total(), 0);
}

#[test]
fn test_same_day_commits_accumulate() {
    let today = now();
    let commits = [
        days_before(today, 3),
        days_before(today, 3) - Duration::hours(5),
    ];
    let histogram = CommitHistogram::build(&commits, 30, &today);

    assert_eq!(histogram.days_ago(3), Some(2));
    assert_eq!(histogram.total(), 2);
    assert_eq!(histogram.peak(), 2);
}

#[test]
fn test_week_window_scenario() {
    let today = now();
    let commits = [
        today,
        days_before(today, 1),
        days_before(today, 1),
        days_before(today, 10),
    ];
    let histogram = CommitHistogram::build(&commits, 7, &today);

    assert_eq!(histogram.len(), 7);
    assert_eq!(histogram.total(), 3);
    assert_eq!(histogram.buckets(), &[0u32, 0, 0, 0, 0, 2, 1]);
    assert_eq!(histogram.days_ago(0), Some(1));
    assert_eq!(histogram.days_ago(1), Some(2));
}

#[test]
fn test_scan_stops_at_first_commit_outside_window() {
    let today = now();
    // out of order on purpose: the last commit is never reached
    let commits = [today, days_before(today, 40), today];
    let histogram = CommitHistogram::build(&commits, 30, &today);

    assert_eq!(histogram.total(), 1);
}

#[test]
fn test_future_commits_are_skipped() {
    let today = now();
    let commits = [today + Duration::days(1), today];
    let histogram = CommitHistogram::build(&commits, 7, &today);

    assert_eq!(histogram.total(), 1);
    assert_eq!(histogram.days_ago(0), Some(1));
}

#[test]
fn test_calendar_days_not_elapsed_hours() {
    // 00:30 today and 23:30 yesterday are an hour apart but on different days
    let today = Utc.with_ymd_and_hms(2024, 6, 15, 0, 30, 0).unwrap();
    let commits = [today, today - Duration::hours(1)];
    let histogram = CommitHistogram::build(&commits, 2, &today);

    assert_eq!(histogram.buckets(), &[1u32, 1]);
}

#[test]
fn test_empty_commit_list() {
    let today = now();
    let histogram = CommitHistogram::build(Vec::<DateTime<Utc>>::new(), 30, &today);

    assert_eq!(histogram, CommitHistogram::empty(30));
    assert_eq!(histogram.total(), 0);
    assert_eq!(histogram.peak(), 0);
}

#[test]
fn test_days_ago_outside_window() {
    let today = now();
    let histogram = CommitHistogram::build([today], 5, &today);

    assert_eq!(histogram.days_ago(4), Some(0));
    assert_eq!(histogram.days_ago(5), None);
}

#[test]
fn test_serializes_as_plain_array() {
    let today = now();
    let commits = [today, days_before(today, 1), days_before(today, 1)];
    let histogram = CommitHistogram::build(&commits, 3, &today);

    assert_eq!(serde_json::to_string(&histogram).unwrap(), "[0,2,1]");
}
