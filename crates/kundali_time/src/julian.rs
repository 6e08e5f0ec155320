//! Julian Day arithmetic.
//!
//! The Julian Day is a continuous count of days since noon on
//! -4712-Jan-01 (Julian proleptic calendar). Day boundaries fall at
//! noon, not midnight, so a civil time of 12:00 UT lands exactly on a
//! whole Julian Day.
//!
//! The calendar conversion is the Fliegel-Van Flandern integer
//! algorithm for the Gregorian calendar.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day Number for a Gregorian calendar date (Fliegel-Van Flandern).
///
/// The returned number labels the Julian day that begins at noon UT on
/// the given civil date. Behavior for invalid calendar dates (e.g.
/// April 31) is undefined; callers validate via
/// [`crate::CivilDateTime::new`].
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32_045
}

/// Julian centuries elapsed since J2000.0 for a given Julian Date.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// English weekday name for the civil date containing the given Julian Date.
///
/// JD 0 began at noon on a Monday, so `floor(jd + 0.5) mod 7` maps
/// 0 to Monday.
pub fn weekday_name(jd: f64) -> &'static str {
    const NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    let jdn = (jd + 0.5).floor() as i64;
    NAMES[jdn.rem_euclid(7) as usize]
}
