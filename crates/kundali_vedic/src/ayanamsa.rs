//! Lahiri (Chitrapaksha) ayanamsa.
//!
//! The ayanamsa is the accumulated precession offset between the
//! tropical zodiac (anchored to the moving equinox) and the sidereal
//! zodiac (anchored to the fixed stars). Lahiri is the Indian
//! government standard (Calendar Reform Committee, 1957): Spica at
//! 0 deg Libra sidereal, ~23.85 deg at J2000.0, growing ~50.3
//! arcseconds per year.

use kundali_ephem::{SiderealLongitude, TropicalLongitude};
use kundali_time::julian_centuries;

/// Lahiri ayanamsa in degrees at a given Julian Date.
///
/// `23.85 + (50.2564 + (0.0222 - 0.000042 T) T) T / 3600` with T in
/// Julian centuries from J2000.0 (Indian Astronomical Ephemeris form).
pub fn lahiri_ayanamsa_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.85 + (50.2564 + (0.0222 - 0.000_042 * t) * t) * t / 3_600.0
}

/// Convert a tropical longitude to sidereal by subtracting the
/// ayanamsa for the same Julian Date.
///
/// The `jd` here must be the same Julian Date the tropical longitude
/// was computed for; the chart assembler computes the ayanamsa once
/// and applies it to every longitude of the chart.
pub fn to_sidereal(tropical: TropicalLongitude, jd: f64) -> SiderealLongitude {
    SiderealLongitude::new(tropical.degrees() - lahiri_ayanamsa_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::J2000_JD;

    #[test]
    fn lahiri_at_j2000() {
        // T = 0: the polynomial collapses to its constant term.
        let aya = lahiri_ayanamsa_deg(J2000_JD);
        assert!((aya - 23.85).abs() < 0.01, "got {aya}");
    }

    #[test]
    fn lahiri_at_2024() {
        // Rashtriya Panchang: ~24.19 deg in early 2024.
        let aya = lahiri_ayanamsa_deg(2_460_310.5);
        assert!((aya - 24.19).abs() < 0.02, "got {aya}");
    }

    #[test]
    fn lahiri_monotonic_in_modern_era() {
        // Precession accumulates; the offset grows year over year.
        let mut prev = lahiri_ayanamsa_deg(J2000_JD - 100.0 * 365.25);
        for years in (-99..=100).map(f64::from) {
            let aya = lahiri_ayanamsa_deg(J2000_JD + years * 365.25);
            assert!(aya > prev, "not monotonic at {years} years");
            prev = aya;
        }
    }

    #[test]
    fn lahiri_rate_about_fifty_arcsec_per_year() {
        let a1 = lahiri_ayanamsa_deg(J2000_JD);
        let a2 = lahiri_ayanamsa_deg(J2000_JD + 365.25);
        let rate_arcsec = (a2 - a1) * 3_600.0;
        assert!((rate_arcsec - 50.26).abs() < 0.1, "rate {rate_arcsec}");
    }

    #[test]
    fn sidereal_round_trip() {
        let jd = 2_455_000.5;
        for deg in [0.0, 12.34, 180.0, 300.0, 359.9] {
            let tropical = TropicalLongitude::new(deg);
            let sidereal = to_sidereal(tropical, jd);
            let back = (sidereal.degrees() + lahiri_ayanamsa_deg(jd)).rem_euclid(360.0);
            assert!(
                (back - deg).abs() < 1e-9,
                "round trip {deg} -> {back}"
            );
        }
    }

    #[test]
    fn sidereal_lags_tropical_by_ayanamsa() {
        let jd = J2000_JD;
        let tropical = TropicalLongitude::new(100.0);
        let sidereal = to_sidereal(tropical, jd);
        let lag = (tropical.degrees() - sidereal.degrees()).rem_euclid(360.0);
        assert!((lag - lahiri_ayanamsa_deg(jd)).abs() < 1e-12);
    }
}
