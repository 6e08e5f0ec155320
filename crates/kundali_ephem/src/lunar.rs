//! Lunar tropical longitude, truncated ELP-derived periodic series.
//!
//! Five fundamental arguments (mean longitude, elongation, solar and
//! lunar mean anomalies, argument of latitude) feed a table of 34
//! periodic sine terms, plus three additive corrections for the Venus
//! and Jupiter perturbations and Earth's flattening. Coefficients run
//! from 6.288774 deg down to 0.002 deg; the truncation keeps the
//! result within a few arc-minutes of a full ephemeris, which is what
//! nakshatra classification (13.33-deg buckets) needs.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47,
//! longitude terms with |coefficient| >= 0.002 deg.

use kundali_time::julian_centuries;

use crate::angle::TropicalLongitude;

/// One periodic term: integer multipliers of (D, M, M', F) and the
/// sine coefficient in degrees.
struct LunarTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

/// Main longitude series, largest terms first (Meeus Table 47.A subset).
const LONGITUDE_TERMS: [LunarTerm; 34] = [
    LunarTerm { d: 0, m: 0, mp: 1, f: 0, coeff: 6.288_774 },
    LunarTerm { d: 2, m: 0, mp: -1, f: 0, coeff: 1.274_027 },
    LunarTerm { d: 2, m: 0, mp: 0, f: 0, coeff: 0.658_314 },
    LunarTerm { d: 0, m: 0, mp: 2, f: 0, coeff: 0.213_618 },
    LunarTerm { d: 0, m: 1, mp: 0, f: 0, coeff: -0.185_116 },
    LunarTerm { d: 0, m: 0, mp: 0, f: 2, coeff: -0.114_332 },
    LunarTerm { d: 2, m: 0, mp: -2, f: 0, coeff: 0.058_793 },
    LunarTerm { d: 2, m: -1, mp: -1, f: 0, coeff: 0.057_066 },
    LunarTerm { d: 2, m: 0, mp: 1, f: 0, coeff: 0.053_322 },
    LunarTerm { d: 2, m: -1, mp: 0, f: 0, coeff: 0.045_758 },
    LunarTerm { d: 0, m: 1, mp: -1, f: 0, coeff: -0.040_923 },
    LunarTerm { d: 1, m: 0, mp: 0, f: 0, coeff: -0.034_720 },
    LunarTerm { d: 0, m: 1, mp: 1, f: 0, coeff: -0.030_383 },
    LunarTerm { d: 2, m: 0, mp: 0, f: -2, coeff: 0.015_327 },
    LunarTerm { d: 0, m: 0, mp: 1, f: 2, coeff: -0.012_528 },
    LunarTerm { d: 0, m: 0, mp: 1, f: -2, coeff: 0.010_980 },
    LunarTerm { d: 4, m: 0, mp: -1, f: 0, coeff: 0.010_675 },
    LunarTerm { d: 0, m: 0, mp: 3, f: 0, coeff: 0.010_034 },
    LunarTerm { d: 4, m: 0, mp: -2, f: 0, coeff: 0.008_548 },
    LunarTerm { d: 2, m: 1, mp: -1, f: 0, coeff: -0.007_888 },
    LunarTerm { d: 2, m: 1, mp: 0, f: 0, coeff: -0.006_766 },
    LunarTerm { d: 1, m: 0, mp: -1, f: 0, coeff: -0.005_163 },
    LunarTerm { d: 1, m: 1, mp: 0, f: 0, coeff: 0.004_987 },
    LunarTerm { d: 2, m: -1, mp: 1, f: 0, coeff: 0.004_036 },
    LunarTerm { d: 2, m: 0, mp: 2, f: 0, coeff: 0.003_994 },
    LunarTerm { d: 4, m: 0, mp: 0, f: 0, coeff: 0.003_861 },
    LunarTerm { d: 2, m: 0, mp: -3, f: 0, coeff: 0.003_665 },
    LunarTerm { d: 0, m: 1, mp: -2, f: 0, coeff: -0.002_689 },
    LunarTerm { d: 2, m: 0, mp: 1, f: -2, coeff: -0.002_602 },
    LunarTerm { d: 2, m: -1, mp: -2, f: 0, coeff: 0.002_390 },
    LunarTerm { d: 1, m: 0, mp: 1, f: 0, coeff: -0.002_348 },
    LunarTerm { d: 2, m: -2, mp: 0, f: 0, coeff: 0.002_236 },
    LunarTerm { d: 0, m: 1, mp: 2, f: 0, coeff: -0.002_120 },
    LunarTerm { d: 0, m: 2, mp: 0, f: 0, coeff: -0.002_069 },
];

/// Fundamental arguments at time T (Julian centuries from J2000.0),
/// all in degrees, not normalized.
struct Fundamentals {
    /// Moon's mean longitude L'.
    lp: f64,
    /// Mean elongation of the Moon from the Sun D.
    d: f64,
    /// Sun's mean anomaly M.
    m: f64,
    /// Moon's mean anomaly M'.
    mp: f64,
    /// Moon's argument of latitude F.
    f: f64,
}

fn fundamentals(t: f64) -> Fundamentals {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    Fundamentals {
        lp: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
        d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
        mp: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    }
}

/// Moon's geocentric tropical ecliptic longitude at a given Julian Date.
pub fn moon_tropical_longitude(jd: f64) -> TropicalLongitude {
    let t = julian_centuries(jd);
    let args = fundamentals(t);

    // Auxiliary arguments: Venus (A1), Jupiter (A2) perturbations.
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;

    let mut lambda = args.lp;
    for term in &LONGITUDE_TERMS {
        let arg = term.d as f64 * args.d
            + term.m as f64 * args.m
            + term.mp as f64 * args.mp
            + term.f as f64 * args.f;
        lambda += term.coeff * arg.to_radians().sin();
    }

    // Additive corrections: Venus, Earth flattening, Jupiter.
    lambda += 0.003_958 * a1.to_radians().sin();
    lambda += 0.001_962 * (args.lp - args.f).to_radians().sin();
    lambda += 0.000_318 * a2.to_radians().sin();

    TropicalLongitude::new(lambda)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::J2000_JD;

    #[test]
    fn largest_term_leads_table() {
        assert!((LONGITUDE_TERMS[0].coeff - 6.288_774).abs() < 1e-12);
        for pair in LONGITUDE_TERMS.windows(2) {
            assert!(pair[0].coeff.abs() >= pair[1].coeff.abs());
        }
    }

    #[test]
    fn moon_meeus_example_47a() {
        // Meeus example 47.a: 1992-Apr-12 0h TD (JD 2448724.5),
        // apparent longitude 133.1626 deg from the full series. The
        // truncated table lands within ~0.01 deg.
        let lon = moon_tropical_longitude(2_448_724.5).degrees();
        assert!((lon - 133.1626).abs() < 0.05, "got {lon}");
    }

    #[test]
    fn moon_advances_about_13_degrees_per_day() {
        let l1 = moon_tropical_longitude(J2000_JD).degrees();
        let l2 = moon_tropical_longitude(J2000_JD + 1.0).degrees();
        let step = (l2 - l1).rem_euclid(360.0);
        assert!((11.0..15.5).contains(&step), "step {step}");
    }

    #[test]
    fn moon_sidereal_month_closes_circle() {
        // After one sidereal month (~27.3217 days) the Moon returns to
        // nearly the same longitude.
        let l1 = moon_tropical_longitude(J2000_JD).degrees();
        let l2 = moon_tropical_longitude(J2000_JD + 27.321_661).degrees();
        let mut diff = (l2 - l1).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(diff < 2.0, "diff {diff}");
    }

    #[test]
    fn moon_output_normalized() {
        for i in 0..60 {
            let jd = J2000_JD + i as f64 * 1.37;
            let lon = moon_tropical_longitude(jd).degrees();
            assert!((0.0..360.0).contains(&lon), "jd {jd} -> {lon}");
        }
    }

    #[test]
    fn moon_deterministic() {
        let jd = 2_460_310.25;
        let a = moon_tropical_longitude(jd).degrees();
        let b = moon_tropical_longitude(jd).degrees();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
