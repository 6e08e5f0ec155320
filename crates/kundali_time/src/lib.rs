//! Civil time and astronomical time scales.
//!
//! This crate provides:
//! - `CivilDateTime`, a validated UTC calendar date/time
//! - Julian Day conversion (Fliegel-Van Flandern algorithm)
//! - Julian centuries from the J2000.0 epoch
//! - Greenwich Mean Sidereal Time and Local Sidereal Time
//!
//! All downstream longitude models consume the Julian Day produced here,
//! so this is the single entry point from civil time into the engine.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilDateTime, parse_time_hms};
pub use error::TimeError;
pub use julian::{J2000_JD, julian_centuries, julian_day_number, weekday_name};
pub use sidereal::{gmst_deg, local_sidereal_deg};
