//! Ecliptic longitude newtypes, tagged by zodiac flavor.
//!
//! A tropical longitude is measured from the vernal equinox of date; a
//! sidereal longitude is the tropical value minus the ayanamsa. The
//! two live on the same circle and mixing them up is the classic bug
//! in this domain, so they get distinct types. Only the ayanamsa
//! subtraction step should ever turn one into the other.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Ecliptic longitude measured from the vernal equinox, degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TropicalLongitude(f64);

impl TropicalLongitude {
    /// Wrap a raw degree value, normalizing to [0, 360).
    pub fn new(deg: f64) -> Self {
        Self(normalize_360(deg))
    }

    /// Longitude in decimal degrees, guaranteed in [0, 360).
    pub fn degrees(self) -> f64 {
        self.0
    }
}

/// Ecliptic longitude measured in the sidereal zodiac, degrees [0, 360).
///
/// Produced from a [`TropicalLongitude`] by subtracting the ayanamsa;
/// this is what sign and nakshatra classification operate on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SiderealLongitude(f64);

impl SiderealLongitude {
    /// Wrap a raw degree value, normalizing to [0, 360).
    pub fn new(deg: f64) -> Self {
        Self(normalize_360(deg))
    }

    /// Longitude in decimal degrees, guaranteed in [0, 360).
    pub fn degrees(self) -> f64 {
        self.0
    }
}
