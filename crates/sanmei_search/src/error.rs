//! Error types for solar-term search and pillar resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sanmei_time::TimeError;

/// Errors from solar-term search and pillar resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Input outside the supported range (year, month index).
    InputRange(String),
    /// Invalid search or resolver configuration.
    InvalidConfig(&'static str),
    /// Bisection could not bracket or refine a boundary.
    NoConvergence(&'static str),
    /// Invalid civil time, zone offset or longitude.
    Time(TimeError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputRange(msg) => write!(f, "input out of range: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
