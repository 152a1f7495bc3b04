//! Simulation runner and trajectory recording.

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator};
use crate::model::{ConstantInput, TransientModel};
use crate::system::StateSpace;
use ss_core::Real;
use ss_linalg::ColumnVector2;
use tracing::debug;

/// Options for simulation runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: Real,
    /// Horizon (seconds)
    pub t_end: Real,
    /// Offset added to displayed time stamps; never enters the recurrence
    pub initial_time: Real,
    /// Maximum number of samples (safety limit)
    pub max_steps: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.01,
            t_end: 1.0,
            initial_time: 0.0,
            max_steps: 10_000_000,
        }
    }
}

impl SimOptions {
    pub fn new(dt: Real, t_end: Real) -> Self {
        Self {
            dt,
            t_end,
            ..Default::default()
        }
    }

    /// Number of samples `n = round(t_end / dt)`, zero when `n <= 0`.
    pub fn step_count(&self) -> SimResult<usize> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive and finite",
            });
        }
        if !self.t_end.is_finite() {
            return Err(SimError::InvalidArg {
                what: "t_end must be finite",
            });
        }
        if !self.initial_time.is_finite() {
            return Err(SimError::InvalidArg {
                what: "initial_time must be finite",
            });
        }

        let n = (self.t_end / self.dt).round();
        if n <= 0.0 {
            return Ok(0);
        }
        if n > self.max_steps as Real {
            return Err(SimError::InvalidArg {
                what: "t_end / dt exceeds max_steps",
            });
        }
        Ok(n as usize)
    }
}

/// Raw record of a model run: time points and state snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct SimRecord<S> {
    /// Time points `k * dt` (seconds)
    pub t: Vec<Real>,
    /// State snapshots
    pub x: Vec<S>,
}

/// Run `n = round(t_end / dt)` samples of a model, the first being its
/// initial state.
pub fn run_sim<M, I>(
    model: &mut M,
    integrator: &I,
    opts: &SimOptions,
) -> SimResult<SimRecord<M::State>>
where
    M: TransientModel,
    I: Integrator,
{
    let n = opts.step_count()?;

    let mut t_record = Vec::with_capacity(n);
    let mut x_record: Vec<M::State> = Vec::with_capacity(n);

    if n == 0 {
        return Ok(SimRecord {
            t: t_record,
            x: x_record,
        });
    }

    let mut x = model.initial_state();
    t_record.push(0.0);
    x_record.push(x.clone());

    for k in 1..n {
        let t_prev = (k - 1) as Real * opts.dt;
        x = integrator.step(model, t_prev, &x, opts.dt)?;
        t_record.push(k as Real * opts.dt);
        x_record.push(x.clone());
    }

    Ok(SimRecord {
        t: t_record,
        x: x_record,
    })
}

/// One trajectory sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// `k * dt`, without the display offset
    pub t: Real,
    pub x: ColumnVector2,
    pub y: Real,
}

/// Ordered samples of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub dt: Real,
    pub initial_time: Real,
    samples: Vec<Sample>,
}

impl Trajectory {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Time stamp including the display offset.
    pub fn display_time(&self, sample: &Sample) -> Real {
        sample.t + self.initial_time
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

fn check_finite_input(x0: &ColumnVector2, u: Real) -> SimResult<()> {
    if !x0.is_finite() {
        return Err(SimError::InvalidArg {
            what: "x0 must be finite",
        });
    }
    if !u.is_finite() {
        return Err(SimError::InvalidArg {
            what: "u must be finite",
        });
    }
    Ok(())
}

/// Explicit Euler response of `system` to the constant input `u`.
///
/// `x_0 = x0`, `x_k = x_{k-1} + (A x_{k-1} + B u) dt`, `y_k = C x_k`,
/// `t_k = k dt` for `k = 0..n-1`. A horizon that rounds to zero samples
/// gives an empty trajectory.
pub fn simulate(
    system: &StateSpace,
    x0: ColumnVector2,
    u: Real,
    opts: &SimOptions,
) -> SimResult<Trajectory> {
    system.validate()?;
    check_finite_input(&x0, u)?;

    let mut model = ConstantInput::new(system, x0, u);
    let record = run_sim(&mut model, &ForwardEuler, opts)?;

    let mut samples = Vec::with_capacity(record.t.len());
    for (step, (t, x)) in record.t.into_iter().zip(record.x).enumerate() {
        if !x.is_finite() {
            return Err(SimError::NonFinite { step });
        }
        samples.push(Sample {
            t,
            x,
            y: system.output(&x),
        });
    }

    debug!(samples = samples.len(), dt = opts.dt, "simulation finished");

    Ok(Trajectory {
        dt: opts.dt,
        initial_time: opts.initial_time,
        samples,
    })
}

/// Same as [`simulate`] with the dynamics matrix replaced by `A − B Kᵗ`.
pub fn simulate_closed_loop(
    system: &StateSpace,
    k: &ColumnVector2,
    x0: ColumnVector2,
    u: Real,
    opts: &SimOptions,
) -> SimResult<Trajectory> {
    if !k.is_finite() {
        return Err(SimError::InvalidArg {
            what: "K must be finite",
        });
    }
    simulate(&system.closed_loop(k), x0, u, opts)
}
