//! Golden chart test: J2000.0 noon over New Delhi.
//!
//! Reference values worked by hand from the same published series
//! (Meeus solar/lunar theory + Lahiri polynomial), cross-checked
//! against an ephemeris at sign granularity.

use kundali_ephem::GeoLocation;
use kundali_time::CivilDateTime;
use kundali_vedic::{
    BirthDetails, Nakshatra, Rashi, compute_chart, lahiri_ayanamsa_deg, rashi_of, to_sidereal,
};

fn delhi_j2000() -> BirthDetails {
    BirthDetails::new(
        CivilDateTime::new(2000, 1, 1, 12, 0, 0.0).unwrap(),
        GeoLocation::new(28.6139, 77.209).unwrap(),
    )
}

#[test]
fn j2000_delhi_placements() {
    let chart = compute_chart(&delhi_j2000());

    assert_eq!(chart.sun_sign, Rashi::Sagittarius);
    assert_eq!(chart.moon_sign, Rashi::Libra);
    assert_eq!(chart.ascendant_sign, Rashi::Taurus);
    assert_eq!(chart.nakshatra, Nakshatra::Swati);

    assert!((chart.ayanamsa_deg - 23.85).abs() < 0.01);
    // Tropical Sun 280.38 deg minus ayanamsa.
    assert!((chart.sun_longitude.degrees() - 256.53).abs() < 0.05);
    // Tropical Moon 223.32 deg minus ayanamsa.
    assert!((chart.moon_longitude.degrees() - 199.47).abs() < 0.1);
    // Tropical ascendant 75.72 deg minus ayanamsa.
    assert!((chart.ascendant_longitude.degrees() - 51.87).abs() < 0.1);
}

#[test]
fn sidereal_sign_lags_tropical_sign() {
    // With ayanamsa ~24 deg, the sidereal sign is usually the sign
    // before the tropical one (or the same when deep inside a sign).
    let birth = delhi_j2000();
    let jd = birth.date_time.julian_day();
    let tropical = kundali_ephem::sun_tropical_longitude(jd);

    let tropical_sign = Rashi::from_index((tropical.degrees() / 30.0).floor() as u8);
    let sidereal_sign = rashi_of(to_sidereal(tropical, jd));

    let lag = (tropical_sign.index() as i32 - sidereal_sign.index() as i32).rem_euclid(12);
    assert!(lag == 0 || lag == 1, "lag {lag}");

    // At this particular epoch the Sun sits early in tropical
    // Capricorn, so the sidereal sign steps back to Sagittarius.
    assert_eq!(tropical_sign, Rashi::Capricorn);
    assert_eq!(sidereal_sign, Rashi::Sagittarius);
}

#[test]
fn chart_has_no_hidden_clock_dependency() {
    // Two invocations separated by real wall time still agree exactly.
    let birth = delhi_j2000();
    let a = compute_chart(&birth);
    std::thread::sleep(std::time::Duration::from_millis(5));
    let b = compute_chart(&birth);
    assert_eq!(a, b);
}

#[test]
fn ayanamsa_monotonic_across_two_centuries() {
    let mut prev = f64::MIN;
    for year in 1900..=2100 {
        let dt = CivilDateTime::new(year, 1, 1, 0, 0, 0.0).unwrap();
        let aya = lahiri_ayanamsa_deg(dt.julian_day());
        assert!(aya > prev, "not monotonic at {year}");
        prev = aya;
    }
}

#[test]
fn charts_differ_across_locations_only_in_ascendant() {
    let dt = CivilDateTime::new(1984, 9, 24, 6, 5, 0.0).unwrap();
    let chennai = BirthDetails::new(dt, GeoLocation::new(13.0827, 80.2707).unwrap());
    let sydney = BirthDetails::new(dt, GeoLocation::new(-33.87, 151.21).unwrap());

    let a = compute_chart(&chennai);
    let b = compute_chart(&sydney);

    // Sun/Moon are geocentric: same instant, same longitudes.
    assert_eq!(a.sun_longitude, b.sun_longitude);
    assert_eq!(a.moon_longitude, b.moon_longitude);
    assert_eq!(a.nakshatra, b.nakshatra);
    // The ascendant is topocentric in the horizon sense and must move.
    assert_ne!(a.ascendant_longitude, b.ascendant_longitude);
}
