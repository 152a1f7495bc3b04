//! Step-response characteristics of a recorded output.

use crate::sim::Trajectory;
use ss_core::Real;

/// Summary of a step response `y(t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponseCharacteristics {
    /// Time of the first maximum of `y` (seconds, without display offset).
    pub peak_time: Real,
    pub y_max: Real,
    /// Percent by which `y_max` exceeds the final value. Zero when the
    /// response never exceeds it or the final value is zero.
    pub overshoot_percent: Real,
    /// Final output sample, taken as the steady-state value.
    pub y_ss: Real,
    /// Steady-state error `reference − y_ss`.
    pub steady_state_error: Real,
}

impl ResponseCharacteristics {
    /// `None` for an empty trajectory.
    pub fn from_trajectory(trajectory: &Trajectory, reference: Real) -> Option<Self> {
        let last = trajectory.last()?;
        let y_ss = last.y;

        let mut peak = trajectory.samples()[0];
        for sample in trajectory.iter().skip(1) {
            if sample.y > peak.y {
                peak = *sample;
            }
        }

        let overshoot_percent = if y_ss != 0.0 && peak.y > y_ss {
            (peak.y - y_ss) / y_ss.abs() * 100.0
        } else {
            0.0
        };

        Some(Self {
            peak_time: peak.t,
            y_max: peak.y,
            overshoot_percent,
            y_ss,
            steady_state_error: reference - y_ss,
        })
    }
}
