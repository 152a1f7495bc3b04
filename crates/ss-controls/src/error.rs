//! Error types for regulator design.

use ss_core::CoreError;
use thiserror::Error;

/// Result type for regulator design operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur while solving for an LQR gain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a solver function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The Riccati iterate stopped being finite.
    #[error("Riccati iteration diverged at iteration {iteration}")]
    Diverged { iteration: usize },

    /// Lower-level numeric error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
