//! Geographic observer location.

use crate::error::EphemError;

/// Observer location in decimal degrees.
///
/// Latitude is geodetic, positive north; longitude is positive east of
/// Greenwich (the sign convention the sidereal-time chain expects).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoLocation {
    /// Build a validated location.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    /// The poles are accepted: the ascendant formula degenerates there
    /// but the two-argument arctangent still returns a finite angle.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EphemError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in decimal degrees, positive north.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in decimal degrees, positive east.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians, positive east.
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
