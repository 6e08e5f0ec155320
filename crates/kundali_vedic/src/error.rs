//! Error types for chart input construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_ephem::EphemError;
use kundali_time::TimeError;

/// Errors from assembling chart inputs.
///
/// The computation itself is total; only malformed birth data fails,
/// and it fails here, before any math runs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid birth date or time.
    Time(TimeError),
    /// Invalid birth location.
    Ephem(EphemError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephem(e) => write!(f, "location error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}
