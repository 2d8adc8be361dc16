//! Data model for the persisted headline archive.
//!
//! The archive is a mapping from calendar date (`YYYY-MM-DD`) to the
//! headlines observed on that date, in observation order. It serializes
//! as a plain JSON object so the backing file stays human-readable:
//!
//! ```json
//! {
//!   "2025-05-06": [
//!     "Penn announces new dean"
//!   ]
//! }
//! ```
//!
//! A `BTreeMap` keeps the date keys sorted, so successive writes of the
//! file diff cleanly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date-keyed collection of observed headlines.
///
/// Keys are ISO `YYYY-MM-DD` dates; values are the headlines recorded on
/// that date, oldest first. A date key only ever exists alongside at
/// least one headline, and existing entries are never removed or
/// reordered; [`record`](Self::record) appends.
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HeadlineArchive {
    days: BTreeMap<String, Vec<String>>,
}

impl HeadlineArchive {
    /// Append a headline under the given date key.
    ///
    /// Creates the key with a single-element sequence on the first
    /// observation of the day; later observations on the same date are
    /// appended in call order.
    pub fn record(&mut self, date: &str, headline: &str) {
        self.days
            .entry(date.to_string())
            .or_default()
            .push(headline.to_string());
    }

    /// Headlines recorded for a date, if any.
    pub fn headlines_for(&self, date: &str) -> Option<&[String]> {
        self.days.get(date).map(Vec::as_slice)
    }

    /// Number of dates with at least one observation.
    pub fn date_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of recorded headlines across all dates.
    pub fn headline_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
