//! The year grid model: one marker per day plus progress statistics.

use std::cmp::Ordering;

use annum_calendar::DayOfYear;

use crate::marker::{DayMarker, DayState};
use crate::stats::YearProgress;

/// Complete year-progress model for one moment: a marker for every day of
/// the year and the aggregate statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    year: i32,
    markers: Vec<DayMarker>,
    progress: YearProgress,
}

impl GridModel {
    /// Computes the grid model for `today`.
    ///
    /// Produces exactly one marker per day of the year: days before `today`
    /// are [`DayState::Elapsed`], `today` itself is [`DayState::Current`],
    /// and later days are [`DayState::Upcoming`]. The computation is a pure
    /// function of `today`: the same input always yields the same model.
    pub fn compute(today: DayOfYear) -> Self {
        let current = today.get();
        let markers = (1..=today.year_len())
            .map(|day| {
                let state = match day.cmp(&current) {
                    Ordering::Less => DayState::Elapsed,
                    Ordering::Equal => DayState::Current,
                    Ordering::Greater => DayState::Upcoming,
                };
                DayMarker::new(day, state)
            })
            .collect();
        Self {
            year: today.year(),
            markers,
            progress: YearProgress::of(today),
        }
    }

    /// Returns the year the model describes.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the per-day markers, in day order.
    pub fn markers(&self) -> &[DayMarker] {
        &self.markers
    }

    /// Returns the aggregate statistics.
    pub fn progress(&self) -> YearProgress {
        self.progress
    }
}
