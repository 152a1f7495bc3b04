//! Serialized sample type.

use serde::{Deserialize, Serialize};
use ss_core::Real;
use ss_sim::Trajectory;

/// One trajectory sample in sink field order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Display time, including the initial-time offset.
    pub time_s: Real,
    pub x0: Real,
    pub x1: Real,
    pub y: Real,
}

impl SampleRecord {
    /// Records for every sample, in time order.
    pub fn from_trajectory(trajectory: &Trajectory) -> Vec<SampleRecord> {
        trajectory
            .iter()
            .map(|s| SampleRecord {
                time_s: trajectory.display_time(s),
                x0: s.x[0],
                x1: s.x[1],
                y: s.y,
            })
            .collect()
    }
}
