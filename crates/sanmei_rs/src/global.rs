//! Process-wide engine for the convenience functions.

use std::sync::OnceLock;

use crate::config::ChartConfig;
use crate::engine::Engine;
use crate::error::ChartError;

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Build the global engine. Fails if it already exists or `config` is rejected.
pub fn init(config: ChartConfig) -> Result<(), ChartError> {
    if ENGINE.get().is_some() {
        return Err(ChartError::AlreadyInitialized);
    }
    let engine = Engine::new(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| ChartError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static Engine, ChartError> {
    ENGINE.get().ok_or(ChartError::NotInitialized)
}
