//! Tropical ascendant (rising ecliptic point) via spherical astronomy.
//!
//! The ascendant is the ecliptic longitude crossing the eastern
//! horizon. It depends on the local sidereal time, the obliquity of
//! the ecliptic, and the observer's latitude:
//!
//! `asc = atan2(cos lst, -sin lst * cos eps + tan lat * sin eps)`
//!
//! The two-argument arctangent resolves the quadrant; a plain `atan`
//! here is the classic source of 180-deg-off ascendants.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13.

use kundali_time::{gmst_deg, julian_centuries, local_sidereal_deg};

use crate::angle::TropicalLongitude;
use crate::location::GeoLocation;

/// Mean obliquity of the ecliptic, degrees.
///
/// `eps = 23.439291 - 0.0130042 T - 0.00000016 T^2 + 0.000000504 T^3`
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.439_291 - 0.013_004_2 * t - 0.000_000_16 * t * t + 0.000_000_504 * t * t * t
}

/// Tropical ecliptic longitude of the ascendant for a time and place.
///
/// Degenerate at latitude +/-90 deg where `tan` blows up; the
/// two-argument arctangent still yields a finite angle there and no
/// special casing is applied.
pub fn ascendant_tropical_longitude(jd: f64, location: &GeoLocation) -> TropicalLongitude {
    let lst = local_sidereal_deg(gmst_deg(jd), location.longitude_deg()).to_radians();
    let eps = mean_obliquity_deg(jd).to_radians();
    let lat = location.latitude_rad();

    let asc = f64::atan2(lst.cos(), -lst.sin() * eps.cos() + lat.tan() * eps.sin());
    TropicalLongitude::new(asc.to_degrees())
}
