use std::result::Result as StdResult;

use tally_config::ConfigError;
use tally_core::CoreError;
use tally_intake::IntakeError;
use thiserror::Error;

/// Unified error type for the computation, intake and config layers.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, TallyError>;
