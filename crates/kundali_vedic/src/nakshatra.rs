//! Nakshatra (lunar mansion) classification.
//!
//! The sidereal ecliptic divides into 27 equal nakshatras of
//! 13 deg 20' (360/27 deg) each, from Ashwini at 0 deg to Revati.
//! Each nakshatra further divides into 4 padas of 3 deg 20'.

use kundali_ephem::SiderealLongitude;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra, 3 deg 20'.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras in order (Ashwini = 0 .. Revati = 26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order, for index lookups.
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra, the form persisted in user profiles.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra for a 0-based index, wrapping modulo 27.
    pub fn from_index(index: u8) -> Nakshatra {
        ALL_NAKSHATRAS[(index % 27) as usize]
    }

    /// Look up a nakshatra by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Nakshatra> {
        ALL_NAKSHATRAS
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Determine the nakshatra from a sidereal Moon longitude.
pub fn nakshatra_of(longitude: SiderealLongitude) -> Nakshatra {
    let idx = (longitude.degrees() / NAKSHATRA_SPAN_DEG).floor() as u8;
    Nakshatra::from_index(idx)
}

/// Pada (quarter) within the nakshatra, 1-4.
pub fn pada_of(longitude: SiderealLongitude) -> u8 {
    let within = longitude.degrees() % NAKSHATRA_SPAN_DEG;
    let pada = (within / PADA_SPAN_DEG).floor() as u8;
    pada.min(3) + 1
}
