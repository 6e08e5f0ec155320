//! Chart assembly: birth data in, complete sidereal placement set out.
//!
//! One Julian Date and one ayanamsa value serve the whole chart. The
//! Sun, Moon, and ascendant longitudes are all computed for the same
//! instant and converted with the same offset; recomputing either per
//! body would silently desynchronize the placements.

use kundali_ephem::{
    GeoLocation, SiderealLongitude, ascendant_tropical_longitude, moon_tropical_longitude,
    sun_tropical_longitude,
};
use kundali_time::{CivilDateTime, parse_time_hms};

use crate::ayanamsa::{lahiri_ayanamsa_deg, to_sidereal};
use crate::error::ChartError;
use crate::nakshatra::{Nakshatra, nakshatra_of};
use crate::rashi::{Rashi, rashi_of};

/// Validated birth data: a UTC instant plus a place of birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthDetails {
    pub date_time: CivilDateTime,
    pub location: GeoLocation,
}

impl BirthDetails {
    pub fn new(date_time: CivilDateTime, location: GeoLocation) -> Self {
        Self {
            date_time,
            location,
        }
    }

    /// Build from raw calendar parts, an `HH:MM[:SS]` time string, and
    /// decimal coordinates — the shape birth profiles arrive in.
    pub fn from_civil_parts(
        year: i32,
        month: u32,
        day: u32,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        let (hour, minute, second) = parse_time_hms(time)?;
        let date_time = CivilDateTime::new(year, month, day, hour, minute, second)?;
        let location = GeoLocation::new(latitude_deg, longitude_deg)?;
        Ok(Self {
            date_time,
            location,
        })
    }
}

/// A complete set of Vedic placements for one birth.
///
/// All longitudes are sidereal; `ayanamsa_deg` records the offset that
/// was subtracted from the tropical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VedicChart {
    pub moon_sign: Rashi,
    pub sun_sign: Rashi,
    pub ascendant_sign: Rashi,
    pub nakshatra: Nakshatra,
    pub moon_longitude: SiderealLongitude,
    pub sun_longitude: SiderealLongitude,
    pub ascendant_longitude: SiderealLongitude,
    pub ayanamsa_deg: f64,
}

/// Sidereal Moon position: longitude plus both classifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    pub longitude: SiderealLongitude,
    pub sign: Rashi,
    pub nakshatra: Nakshatra,
}

/// Compute the full Vedic chart for a birth.
///
/// Pipeline: civil time -> Julian Date -> tropical Sun/Moon/ascendant
/// longitudes -> sidereal via one shared ayanamsa -> sign and
/// nakshatra classification. Deterministic: no clock access, ever.
pub fn compute_chart(birth: &BirthDetails) -> VedicChart {
    let jd = birth.date_time.julian_day();
    let ayanamsa_deg = lahiri_ayanamsa_deg(jd);

    let moon_longitude = to_sidereal(moon_tropical_longitude(jd), jd);
    let sun_longitude = to_sidereal(sun_tropical_longitude(jd), jd);
    let ascendant_longitude = to_sidereal(ascendant_tropical_longitude(jd, &birth.location), jd);

    VedicChart {
        moon_sign: rashi_of(moon_longitude),
        sun_sign: rashi_of(sun_longitude),
        ascendant_sign: rashi_of(ascendant_longitude),
        nakshatra: nakshatra_of(moon_longitude),
        moon_longitude,
        sun_longitude,
        ascendant_longitude,
        ayanamsa_deg,
    }
}

/// Sidereal Moon longitude, sign, and nakshatra for a birth.
pub fn moon_position(birth: &BirthDetails) -> MoonPosition {
    let jd = birth.date_time.julian_day();
    let longitude = to_sidereal(moon_tropical_longitude(jd), jd);
    MoonPosition {
        longitude,
        sign: rashi_of(longitude),
        nakshatra: nakshatra_of(longitude),
    }
}

/// Just the Moon sign (Rashi) for a birth.
pub fn compute_moon_sign(birth: &BirthDetails) -> Rashi {
    moon_position(birth).sign
}

/// Just the sidereal Sun sign for a birth.
///
/// The Sun's longitude is geocentric, so the location is unused; it
/// stays in the signature for symmetry with the other partial
/// operations.
pub fn compute_sun_sign(birth: &BirthDetails) -> Rashi {
    let jd = birth.date_time.julian_day();
    rashi_of(to_sidereal(sun_tropical_longitude(jd), jd))
}

/// Just the ascendant (lagna) sign for a birth.
pub fn compute_ascendant(birth: &BirthDetails) -> Rashi {
    let jd = birth.date_time.julian_day();
    rashi_of(to_sidereal(
        ascendant_tropical_longitude(jd, &birth.location),
        jd,
    ))
}

/// Just the birth star (nakshatra) for a birth.
pub fn compute_nakshatra(birth: &BirthDetails) -> Nakshatra {
    moon_position(birth).nakshatra
}
