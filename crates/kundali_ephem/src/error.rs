//! Error types for ephemeris inputs.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris input validation.
///
/// The longitude models themselves are total over any `f64` Julian
/// Date; only the geographic input carries constraints.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Latitude or longitude outside its valid range.
    InvalidLocation(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for EphemError {}
