//! Error types for static table validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by the startup self-checks of the static tables.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// A static table disagrees with its reference data or is malformed.
    TableIntegrity {
        /// Which table failed.
        table: &'static str,
        /// First discrepancy found.
        detail: String,
    },
}

impl BaseError {
    pub(crate) fn integrity(table: &'static str, detail: impl Into<String>) -> Self {
        Self::TableIntegrity {
            table,
            detail: detail.into(),
        }
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableIntegrity { table, detail } => {
                write!(f, "{table} table integrity check failed: {detail}")
            }
        }
    }
}

impl Error for BaseError {}
