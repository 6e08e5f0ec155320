//! UTC calendar date/time with validation.
//!
//! `CivilDateTime` is the canonical input type of the engine. Input
//! times are taken as already adjusted to UTC; no timezone or DST
//! resolution happens here or anywhere downstream.

use crate::error::TimeError;
use crate::julian::julian_day_number;

/// A validated UTC calendar date and time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Days in each month of a common year (index 0 = January).
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month of a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

impl CivilDateTime {
    /// Build a validated civil date/time.
    ///
    /// Rejects impossible calendar dates (including Feb 29 in common
    /// years) and out-of-range time components. Downstream Julian Day
    /// conversion is undefined for invalid dates, so this constructor
    /// is the validation seam for the whole engine.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Julian Date for this instant.
    ///
    /// Integer Julian Day Number from the calendar date, plus the
    /// noon-based day fraction `(hour - 12)/24 + minute/1440 +
    /// second/86400`. Midnight therefore lands on `jdn - 0.5` and noon
    /// exactly on `jdn`.
    pub fn julian_day(&self) -> f64 {
        let jdn = julian_day_number(self.year, self.month, self.day) as f64;
        jdn + (self.hour as f64 - 12.0) / 24.0
            + self.minute as f64 / 1_440.0
            + self.second / 86_400.0
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

/// Parse a time-of-day string in `HH:MM` or `HH:MM:SS` form.
///
/// Returns `(hour, minute, second)` without range validation; ranges
/// are checked by [`CivilDateTime::new`]. Birth profiles typically
/// carry `HH:MM`, so seconds are optional and default to zero.
pub fn parse_time_hms(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let mut parts = s.split(':');
    let hour = parts.next().and_then(|p| p.parse::<u32>().ok());
    let minute = parts.next().and_then(|p| p.parse::<u32>().ok());
    let second = match parts.next() {
        None => Some(0.0),
        Some(p) => p.parse::<f64>().ok(),
    };
    if parts.next().is_some() {
        return Err(TimeError::TimeParse(s.to_string()));
    }
    match (hour, minute, second) {
        (Some(h), Some(m), Some(sec)) => Ok((h, m, sec)),
        _ => Err(TimeError::TimeParse(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn j2000_noon_is_exactly_j2000_jd() {
        let dt = CivilDateTime::new(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(dt.julian_day(), J2000_JD);
    }

    #[test]
    fn midnight_is_half_day_before_noon() {
        let dt = CivilDateTime::new(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(dt.julian_day(), J2000_JD - 0.5);
    }

    #[test]
    fn jd_increases_with_time_of_day() {
        let a = CivilDateTime::new(1995, 6, 15, 4, 30, 0.0).unwrap();
        let b = CivilDateTime::new(1995, 6, 15, 4, 31, 0.0).unwrap();
        assert!(b.julian_day() > a.julian_day());
        assert!((b.julian_day() - a.julian_day() - 1.0 / 1_440.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_april_31() {
        assert!(matches!(
            CivilDateTime::new(2023, 4, 31, 0, 0, 0.0),
            Err(TimeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn rejects_feb_29_common_year() {
        assert!(CivilDateTime::new(2023, 2, 29, 0, 0, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 2, 29, 0, 0, 0.0).is_ok());
        // Century rule: 1900 common, 2000 leap
        assert!(CivilDateTime::new(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(CivilDateTime::new(2000, 2, 29, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn rejects_month_zero_and_thirteen() {
        assert!(CivilDateTime::new(2023, 0, 1, 0, 0, 0.0).is_err());
        assert!(CivilDateTime::new(2023, 13, 1, 0, 0, 0.0).is_err());
    }

    #[test]
    fn rejects_hour_24() {
        assert!(matches!(
            CivilDateTime::new(2023, 1, 1, 24, 0, 0.0),
            Err(TimeError::InvalidTime { .. })
        ));
    }

    #[test]
    fn display_iso8601() {
        let dt = CivilDateTime::new(1984, 9, 24, 6, 5, 0.0).unwrap();
        assert_eq!(dt.to_string(), "1984-09-24T06:05:00Z");
    }

    #[test]
    fn parse_hh_mm() {
        assert_eq!(parse_time_hms("14:30").unwrap(), (14, 30, 0.0));
    }

    #[test]
    fn parse_hh_mm_ss() {
        assert_eq!(parse_time_hms("06:05:30").unwrap(), (6, 5, 30.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_time_hms("noonish").is_err());
        assert!(parse_time_hms("12").is_err());
        assert!(parse_time_hms("12:00:00:00").is_err());
    }
}
