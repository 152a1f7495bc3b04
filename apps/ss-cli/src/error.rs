//! Error type for the command-line front end.

/// Wraps the errors of every backend crate behind one printable type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Scenario error: {0}")]
    Project(String),

    #[error("Controller design failed: {0}")]
    Control(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

impl From<ss_project::ProjectError> for CliError {
    fn from(err: ss_project::ProjectError) -> Self {
        CliError::Project(err.to_string())
    }
}

impl From<ss_controls::ControlError> for CliError {
    fn from(err: ss_controls::ControlError) -> Self {
        CliError::Control(err.to_string())
    }
}

impl From<ss_sim::SimError> for CliError {
    fn from(err: ss_sim::SimError) -> Self {
        CliError::Simulation(err.to_string())
    }
}

impl From<ss_results::ResultsError> for CliError {
    fn from(err: ss_results::ResultsError) -> Self {
        CliError::Results(err.to_string())
    }
}
