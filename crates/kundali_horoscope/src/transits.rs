//! Daily Sun/Moon transits relative to a natal Moon sign.
//!
//! Runs the geocentric Sun/Moon longitude path for the given day; no
//! location is involved because neither longitude is topocentric in
//! this model. The caller supplies the instant — "today" never leaks
//! in from a clock.

use kundali_ephem::{moon_tropical_longitude, sun_tropical_longitude};
use kundali_time::CivilDateTime;
use kundali_vedic::{Rashi, rashi_of, to_sidereal};

/// One transiting body: its current sidereal sign and its whole-sign
/// aspect to the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transit {
    pub sign: Rashi,
    /// Sign-distance aspect in degrees, always a multiple of 30.
    pub aspect_to_natal_moon_deg: f64,
}

/// Sun and Moon transits for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTransits {
    pub sun: Transit,
    pub moon: Transit,
}

/// Whole-sign aspect between a transiting sign and the natal sign:
/// `((transit - natal) mod 12) * 30` degrees.
pub fn sign_aspect_deg(transit: Rashi, natal: Rashi) -> f64 {
    let steps = (transit.index() as i32 - natal.index() as i32).rem_euclid(12);
    steps as f64 * 30.0
}

/// Compute the Sun and Moon transits for a date relative to a natal
/// Moon sign.
pub fn daily_transits(date_time: &CivilDateTime, natal_moon: Rashi) -> DailyTransits {
    let jd = date_time.julian_day();

    let sun_sign = rashi_of(to_sidereal(sun_tropical_longitude(jd), jd));
    let moon_sign = rashi_of(to_sidereal(moon_tropical_longitude(jd), jd));

    DailyTransits {
        sun: Transit {
            sign: sun_sign,
            aspect_to_natal_moon_deg: sign_aspect_deg(sun_sign, natal_moon),
        },
        moon: Transit {
            sign: moon_sign,
            aspect_to_natal_moon_deg: sign_aspect_deg(moon_sign, natal_moon),
        },
    }
}
