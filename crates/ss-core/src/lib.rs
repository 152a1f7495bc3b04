//! ss-core: shared foundation for the state-space workspace.
//!
//! Contains:
//! - numeric (Real + float guards)
//! - error (shared error types)
//! - timing (wall-clock stopwatch for reporting run times)

pub mod error;
pub mod numeric;
pub mod timing;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use timing::Stopwatch;
