//! Per-day markers for the year grid.

/// Classification of one day relative to the current day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayState {
    /// The day has already passed.
    Elapsed,
    /// The day is today.
    Current,
    /// The day has not arrived yet.
    Upcoming,
}

/// One grid marker: a day of the year and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarker {
    day: u16,
    state: DayState,
}

impl DayMarker {
    pub(crate) fn new(day: u16, state: DayState) -> Self {
        Self { day, state }
    }

    /// Returns the 1-based day-of-year this marker stands for.
    pub fn day(self) -> u16 {
        self.day
    }

    /// Returns the marker's classification.
    pub fn state(self) -> DayState {
        self.state
    }

    /// Human-readable label, e.g. `"Day 74"`.
    pub fn label(self) -> String {
        format!("Day {}", self.day)
    }
}
