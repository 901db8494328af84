//! Aggregate year-progress statistics.

use annum_calendar::DayOfYear;

/// Days-left and percent-complete statistics for one day within a year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearProgress {
    year: i32,
    day_of_year: u16,
    year_len: u16,
    days_left: u16,
    percent: f64,
}

impl YearProgress {
    /// Computes progress statistics for `today`.
    pub fn of(today: DayOfYear) -> Self {
        let year_len = today.year_len();
        let day_of_year = today.get();
        Self {
            year: today.year(),
            day_of_year,
            year_len,
            days_left: today.days_remaining(),
            percent: f64::from(day_of_year) / f64::from(year_len) * 100.0,
        }
    }

    /// Returns the year the statistics describe.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the current day-of-year (1-based).
    pub fn day_of_year(self) -> u16 {
        self.day_of_year
    }

    /// Returns the length of the year (365 or 366).
    pub fn year_len(self) -> u16 {
        self.year_len
    }

    /// Returns the number of days remaining after today.
    pub fn days_left(self) -> u16 {
        self.days_left
    }

    /// Returns the fraction of the year elapsed, in percent (0.0..=100.0).
    pub fn percent(self) -> f64 {
        self.percent
    }

    /// Returns the percent elapsed formatted to one decimal, e.g. `"9.3%"`.
    pub fn percent_label(self) -> String {
        format!("{:.1}%", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_day_of_leap_year() {
        let p = YearProgress::of(DayOfYear::new(2024, 1).unwrap());
        assert_eq!(p.year(), 2024);
        assert_eq!(p.day_of_year(), 1);
        assert_eq!(p.year_len(), 366);
        assert_eq!(p.days_left(), 365);
        assert_eq!(p.percent_label(), "0.3%");
    }

    #[test]
    fn last_day_of_common_year() {
        let p = YearProgress::of(DayOfYear::new(2023, 365).unwrap());
        assert_eq!(p.year_len(), 365);
        assert_eq!(p.days_left(), 0);
        assert_eq!(p.percent_label(), "100.0%");
    }

    #[test]
    fn midpoint_of_leap_year() {
        let p = YearProgress::of(DayOfYear::new(2024, 183).unwrap());
        assert_eq!(p.percent(), 50.0);
        assert_eq!(p.percent_label(), "50.0%");
    }

    #[test]
    fn days_accounting_balances() {
        for doy in 1..=365u16 {
            let p = YearProgress::of(DayOfYear::new(2023, doy).unwrap());
            assert_eq!(p.day_of_year() + p.days_left(), p.year_len());
        }
    }

    #[test]
    fn percent_stays_in_range() {
        for doy in 1..=366u16 {
            let p = YearProgress::of(DayOfYear::new(2024, doy).unwrap());
            assert!(p.percent() > 0.0);
            assert!(p.percent() <= 100.0);
        }
    }
}
