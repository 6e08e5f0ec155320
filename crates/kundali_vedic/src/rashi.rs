//! Rashi (zodiac sign) classification.
//!
//! The sidereal ecliptic divides into 12 equal signs of 30 degrees,
//! starting from Mesha (Aries) at 0 deg. Profile storage and the
//! horoscope text tables key off the English names, so those are the
//! canonical `name()`; the Sanskrit names ride along for display.

use kundali_ephem::SiderealLongitude;

/// The 12 rashis in zodiacal order (Aries = 0 .. Pisces = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 rashis in order, for index lookups.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

impl Rashi {
    /// English name, the canonical form persisted in user profiles.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sanskrit name of the rashi.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Look up a rashi by its English name (case-insensitive).
    ///
    /// Persisted profiles store the English name string; this is the
    /// re-hydration path for natal signs.
    pub fn from_name(name: &str) -> Option<Rashi> {
        ALL_RASHIS
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Determine the rashi from a sidereal ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus =
/// [30, 60), and so on; boundaries resolve to the sign they open.
pub fn rashi_of(longitude: SiderealLongitude) -> Rashi {
    let idx = (longitude.degrees() / 30.0).floor() as u8;
    Rashi::from_index(idx)
}
