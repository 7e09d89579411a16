//! Error type for the chart engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sanmei_base::BaseError;
use sanmei_search::SearchError;
use sanmei_time::TimeError;

/// Errors from engine construction and chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth data outside the supported range (year, longitude, offset, clock).
    InputRange(String),
    /// A static table failed its startup self-check.
    TableIntegrity(String),
    /// Invalid engine configuration.
    InvalidConfig(&'static str),
    /// Solar-term search failure.
    Search(SearchError),
    /// The global engine has not been initialized.
    NotInitialized,
    /// The global engine was already initialized.
    AlreadyInitialized,
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputRange(msg) => write!(f, "input out of range: {msg}"),
            Self::TableIntegrity(msg) => write!(f, "table integrity: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::NotInitialized => write!(f, "engine not initialized; call init() first"),
            Self::AlreadyInitialized => write!(f, "engine already initialized"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for ChartError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InputRange(msg) => Self::InputRange(msg),
            SearchError::Time(t) => Self::InputRange(t.to_string()),
            SearchError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            other => Self::Search(other),
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InputRange(e.to_string())
    }
}

impl From<BaseError> for ChartError {
    fn from(e: BaseError) -> Self {
        Self::TableIntegrity(e.to_string())
    }
}
