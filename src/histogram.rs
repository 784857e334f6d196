use crate::dates::day_ordinal;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::borrow::Borrow;

/// Per-day commit counts over a trailing window, oldest day first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommitHistogram {
    buckets: Vec<u32>,
}

impl CommitHistogram {
    /// Buckets `timestamps` (newest first) into `window` days ending on `today`.
    ///
    /// Scanning stops at the first timestamp that falls before the window, so
    /// the input must be in descending date order. Timestamps dated after
    /// `today` are skipped.
    pub fn build<Tz, I>(timestamps: I, window: usize, today: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        I: IntoIterator,
        I::Item: Borrow<DateTime<Tz>>,
    {
        let mut buckets = vec![0u32; window];
        let today_ordinal = day_ordinal(today);

        for timestamp in timestamps {
            let diff = today_ordinal - day_ordinal(timestamp.borrow());
            if diff < 0 {
                continue;
            }
            let diff = diff as usize;
            if diff >= window {
                break;
            }
            buckets[diff] += 1;
        }

        // bucket 0 is today until here
        buckets.reverse();
        Self { buckets }
    }

    /// An all-zero histogram of `window` days
    pub fn empty(window: usize) -> Self {
        Self { buckets: vec![0; window] }
    }

    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Commits counted across the whole window
    pub fn total(&self) -> u32 {
        self.buckets.iter().sum()
    }

    /// Largest single-day count
    pub fn peak(&self) -> u32 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Count for the day `days_ago` days before today
    pub fn days_ago(&self, days_ago: usize) -> Option<u32> {
        let last = self.buckets.len().checked_sub(1)?;
        let index = last.checked_sub(days_ago)?;
        self.buckets.get(index).copied()
    }
}
