//! Error types for simulation operations.

use ss_core::CoreError;
use thiserror::Error;

/// Errors encountered during a simulation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite state at step {step}")]
    NonFinite { step: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
