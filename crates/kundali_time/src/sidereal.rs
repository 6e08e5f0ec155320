//! Greenwich Mean Sidereal Time and Local Sidereal Time, in degrees.
//!
//! The ascendant computation needs the orientation of the local
//! horizon relative to the equinox, which is exactly what sidereal
//! time measures. Both functions work in degrees to match the rest of
//! the longitude pipeline.
//!
//! GMST polynomial: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, julian_centuries};

/// Normalize an angle in degrees to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Greenwich Mean Sidereal Time at a given Julian Date, in degrees.
///
/// `gmst = 280.46061837 + 360.98564736629 (jd - J2000)
///         + 0.000387933 T^2 - T^3 / 38710000`
///
/// Returns a value in [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(gmst)
}

/// Local Sidereal Time from GMST and observer east longitude, degrees.
///
/// `lst = gmst + longitude_east`, normalized to [0, 360).
pub fn local_sidereal_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst + longitude_east_deg)
}
