//! Solar tropical longitude, low-precision theory.
//!
//! Mean longitude plus the equation of center (three sine terms in the
//! mean anomaly). Good to ~0.01 deg over several centuries around
//! J2000, which is far below the 30-deg sign granularity downstream.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25.

use kundali_time::julian_centuries;

use crate::angle::TropicalLongitude;

/// Sun's geometric mean longitude, degrees (not normalized).
fn mean_longitude_deg(t: f64) -> f64 {
    280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t
}

/// Sun's mean anomaly, degrees (not normalized).
fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t
}

/// Equation of center, degrees.
fn equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Sun's true tropical ecliptic longitude at a given Julian Date.
pub fn sun_tropical_longitude(jd: f64) -> TropicalLongitude {
    let t = julian_centuries(jd);
    let l0 = mean_longitude_deg(t);
    let m = mean_anomaly_deg(t);
    let c = equation_of_center_deg(t, m);
    TropicalLongitude::new(l0 + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::J2000_JD;

    #[test]
    fn sun_at_j2000_noon() {
        // True longitude at the J2000.0 epoch is ~280.38 deg
        // (mean longitude 280.466 minus ~0.084 equation of center).
        let lon = sun_tropical_longitude(J2000_JD).degrees();
        assert!((lon - 280.38).abs() < 0.05, "got {lon}");
    }

    #[test]
    fn sun_near_equinox() {
        // 2000-Mar-20 07:35 UT was the March equinox: longitude ~0.
        let jd = 2_451_623.5 + 7.0 / 24.0 + 35.0 / 1_440.0;
        let lon = sun_tropical_longitude(jd).degrees();
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.05, "got {lon}");
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let l1 = sun_tropical_longitude(J2000_JD).degrees();
        let l2 = sun_tropical_longitude(J2000_JD + 1.0).degrees();
        let step = (l2 - l1).rem_euclid(360.0);
        assert!((step - 1.02).abs() < 0.05, "step {step}");
    }

    #[test]
    fn sun_output_normalized() {
        for i in 0..48 {
            let jd = J2000_JD + i as f64 * 30.44;
            let lon = sun_tropical_longitude(jd).degrees();
            assert!((0.0..360.0).contains(&lon), "jd {jd} -> {lon}");
        }
    }

    #[test]
    fn sun_deterministic() {
        let jd = 2_448_724.5;
        let a = sun_tropical_longitude(jd).degrees();
        let b = sun_tropical_longitude(jd).degrees();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
