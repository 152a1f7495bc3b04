//! ss-results: trajectory output sinks.
//!
//! Every format emits the fields `(t, x[0], x[1], y)` in that order:
//! - `Text`: the legacy whitespace-separated layout with a
//!   `Time(s) Column1 Column2 Y` header
//! - `Csv`: `time_s,x0,x1,y` with round-trip precision
//! - `JsonLines`: one [`SampleRecord`] object per line

pub mod format;
pub mod sink;
pub mod types;

pub use format::format_general;
pub use sink::{OutputFormat, read_json_lines, write_trajectory, write_trajectory_file};
pub use types::SampleRecord;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}
