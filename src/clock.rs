//! Wall-clock access and display formatting.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

use annum_calendar::DayOfYear;

/// Abstraction over "now" so rendering stays deterministic in tests and for
/// `show --date`.
pub trait Clock {
    /// Returns the current moment in local time.
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Pins the clock to `date` at local noon.
    ///
    /// Noon keeps the duration-based day-of-year computation clear of
    /// offset shifts around midnight.
    pub fn at_noon(date: NaiveDate) -> Result<Self> {
        let midday = date.and_hms_opt(12, 0, 0).expect("noon is a valid time");
        let moment = Local
            .from_local_datetime(&midday)
            .earliest()
            .with_context(|| format!("no local representation for {date} 12:00"))?;
        Ok(Self(moment))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Zero-padded 24-hour time, e.g. `"09:05"`.
pub fn time_label(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

/// Short date, e.g. `"Tue, Aug 5"`.
pub fn date_label(now: &DateTime<Local>) -> String {
    now.format("%a, %b %-d").to_string()
}

/// Day-of-year of `now`, measured as whole 24-hour units elapsed since
/// December 31 of the prior year at local midnight.
///
/// Deliberately duration-based rather than calendar-based: near a
/// daylight-saving transition the floor division can land one day off, and
/// that behaviour is kept.
pub fn day_of_year(now: &DateTime<Local>) -> Result<DayOfYear> {
    let year = now.year();
    let anchor = Local
        .with_ymd_and_hms(year - 1, 12, 31, 0, 0, 0)
        .earliest()
        .with_context(|| format!("no local midnight for {}-12-31", year - 1))?;
    let days = now.signed_duration_since(anchor).num_days();
    let doy = u16::try_from(days)
        .ok()
        .with_context(|| format!("moment {now} precedes its own year"))?;
    DayOfYear::new(year, doy).context("day-of-year outside the current year")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        FixedClock::at_noon(date).unwrap().now()
    }

    #[test]
    fn time_label_is_zero_padded() {
        let moment = Local.with_ymd_and_hms(2024, 8, 5, 9, 5, 0).unwrap();
        assert_eq!(time_label(&moment), "09:05");
    }

    #[test]
    fn date_label_short_form() {
        assert_eq!(date_label(&noon(2024, 8, 5)), "Mon, Aug 5");
        assert_eq!(date_label(&noon(2023, 12, 31)), "Sun, Dec 31");
    }

    #[test]
    fn day_of_year_january_first() {
        let d = day_of_year(&noon(2024, 1, 1)).unwrap();
        assert_eq!(d.get(), 1);
        assert_eq!(d.year(), 2024);
    }

    #[test]
    fn day_of_year_december_31() {
        assert_eq!(day_of_year(&noon(2023, 12, 31)).unwrap().get(), 365);
        assert_eq!(day_of_year(&noon(2024, 12, 31)).unwrap().get(), 366);
    }

    #[test]
    fn day_of_year_mid_year() {
        assert_eq!(day_of_year(&noon(2024, 7, 1)).unwrap().get(), 183);
        assert_eq!(day_of_year(&noon(2023, 7, 1)).unwrap().get(), 182);
    }

    #[test]
    fn day_of_year_agrees_with_calendar_tables() {
        for (month, day) in [(1u32, 1u32), (2, 28), (3, 1), (6, 15), (12, 31)] {
            let duration_based = day_of_year(&noon(2024, month, day)).unwrap();
            let table_based = DayOfYear::from_ymd(2024, month as u8, day as u8).unwrap();
            assert_eq!(duration_based, table_based);
        }
    }

    #[test]
    fn fixed_clock_is_stable() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::at_noon(date).unwrap();
        assert_eq!(clock.now(), clock.now());
    }
}
