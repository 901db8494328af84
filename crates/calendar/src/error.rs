//! Error types for the annum-calendar crate.

/// Error type for all fallible operations in the annum-calendar crate.
///
/// Covers validation failures for day-of-year values, month numbers, and
/// day-within-month values in the Gregorian calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range for its
    /// year (1..=365, or 1..=366 in leap years).
    #[error("invalid day of year: {doy} for year {year} (must be 1..={len})")]
    InvalidDayOfYear {
        /// The invalid day-of-year value that was provided.
        doy: u16,
        /// The year the value was validated against.
        year: i32,
        /// The length of that year.
        len: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year the month belongs to (February's length depends on it).
        year: i32,
        /// The maximum valid day for that month and year.
        max_day: u8,
    },
}
