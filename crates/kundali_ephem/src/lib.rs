//! Low-precision geocentric ephemeris models for Sun, Moon, and
//! ascendant.
//!
//! This crate provides:
//! - Flavor-tagged ecliptic longitude newtypes (tropical vs sidereal)
//! - The Sun's tropical ecliptic longitude (equation-of-center series)
//! - The Moon's tropical ecliptic longitude (~35-term periodic series)
//! - The tropical ascendant via local sidereal time and obliquity
//!
//! All models are truncated Meeus series: pure `f64` math over a
//! Julian Date, deterministic, accurate to a few arc-minutes, which is
//! ample for sign-level and nakshatra-level classification.

pub mod angle;
pub mod ascendant;
pub mod error;
pub mod location;
pub mod lunar;
pub mod solar;

pub use angle::{SiderealLongitude, TropicalLongitude, normalize_360};
pub use ascendant::{ascendant_tropical_longitude, mean_obliquity_deg};
pub use error::EphemError;
pub use location::GeoLocation;
pub use lunar::moon_tropical_longitude;
pub use solar::sun_tropical_longitude;
