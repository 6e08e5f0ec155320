//! Sidereal (Vedic) layer over the tropical ephemeris models.
//!
//! This crate provides:
//! - Lahiri ayanamsa and the tropical-to-sidereal conversion
//! - Rashi (zodiac sign) and Nakshatra (lunar mansion) classification
//! - The chart assembler producing a complete `VedicChart` from birth
//!   date, time, and place
//!
//! Everything below the chart assembler is a pure, total function; the
//! only fallible surface is input construction.

pub mod ayanamsa;
pub mod chart;
pub mod error;
pub mod nakshatra;
pub mod rashi;

pub use ayanamsa::{lahiri_ayanamsa_deg, to_sidereal};
pub use chart::{
    BirthDetails, MoonPosition, VedicChart, compute_ascendant, compute_chart, compute_moon_sign,
    compute_nakshatra, compute_sun_sign, moon_position,
};
pub use error::ChartError;
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, nakshatra_of, pada_of};
pub use rashi::{ALL_RASHIS, Rashi, rashi_of};
