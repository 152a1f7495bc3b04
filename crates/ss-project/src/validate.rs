//! Scenario validation logic.

use crate::schema::{LATEST_VERSION, LqrDef, PlantDef, RunDef, Scenario};
use ss_core::Real;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_plant(&scenario.plant)?;
    validate_run(&scenario.run)?;
    if let Some(lqr) = &scenario.lqr {
        validate_lqr(lqr)?;
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn check_finite(field: &str, values: &[Real]) -> Result<(), ValidationError> {
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(invalid(&format!("{field}[{i}]"), v, "must be finite"));
        }
    }
    Ok(())
}

fn validate_plant(plant: &PlantDef) -> Result<(), ValidationError> {
    check_finite("plant.a", &plant.a)?;
    check_finite("plant.b", &plant.b)?;
    check_finite("plant.c", &plant.c)
}

fn validate_run(run: &RunDef) -> Result<(), ValidationError> {
    check_finite("run.x0", &run.x0)?;
    check_finite("run.u", &[run.u])?;
    check_finite("run.initial_time", &[run.initial_time])?;

    if !run.dt.is_finite() || run.dt <= 0.0 {
        return Err(invalid("run.dt", run.dt, "must be positive and finite"));
    }
    if !run.t_end.is_finite() || run.t_end < 0.0 {
        return Err(invalid(
            "run.t_end",
            run.t_end,
            "must be non-negative and finite",
        ));
    }
    Ok(())
}

fn validate_lqr(lqr: &LqrDef) -> Result<(), ValidationError> {
    check_finite("lqr.q", &lqr.q)?;

    if !lqr.r.is_finite() || lqr.r == 0.0 {
        return Err(invalid("lqr.r", lqr.r, "must be finite and non-zero"));
    }
    if lqr.solver.max_iterations == 0 {
        return Err(invalid("lqr.max_iterations", 0, "must be positive"));
    }
    if !lqr.solver.tolerance.is_finite() || lqr.solver.tolerance <= 0.0 {
        return Err(invalid(
            "lqr.tolerance",
            lqr.solver.tolerance,
            "must be positive and finite",
        ));
    }
    if !lqr.solver.relaxation.is_finite() || lqr.solver.relaxation <= 0.0 {
        return Err(invalid(
            "lqr.relaxation",
            lqr.solver.relaxation,
            "must be positive and finite",
        ));
    }
    if !(lqr.solver.cutback_factor > 0.0 && lqr.solver.cutback_factor < 1.0) {
        return Err(invalid(
            "lqr.cutback_factor",
            lqr.solver.cutback_factor,
            "must be in (0, 1)",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_valid() {
        validate_scenario(&Scenario::reference()).unwrap();
    }

    #[test]
    fn future_version_is_rejected() {
        let mut scenario = Scenario::reference();
        scenario.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn bad_run_values_are_rejected() {
        let cases: [fn(&mut Scenario); 4] = [
            |s| s.run.dt = 0.0,
            |s| s.run.dt = -0.01,
            |s| s.run.t_end = -1.0,
            |s| s.run.x0[1] = Real::NAN,
        ];
        for mutate in cases {
            let mut scenario = Scenario::reference();
            mutate(&mut scenario);
            assert!(validate_scenario(&scenario).is_err());
        }
    }

    #[test]
    fn bad_lqr_values_are_rejected() {
        let cases: [fn(&mut LqrDef); 5] = [
            |l| l.r = 0.0,
            |l| l.solver.max_iterations = 0,
            |l| l.solver.tolerance = 0.0,
            |l| l.solver.relaxation = Real::INFINITY,
            |l| l.solver.cutback_factor = 1.0,
        ];
        for mutate in cases {
            let mut lqr = LqrDef::new([1.0, 0.0, 0.0, 2.0], 1.0);
            mutate(&mut lqr);
            assert!(validate_lqr(&lqr).is_err());
        }
    }

    #[test]
    fn error_names_the_field() {
        let mut scenario = Scenario::reference();
        scenario.plant.a[2] = Real::INFINITY;
        let err = validate_scenario(&scenario).unwrap_err();
        assert!(err.to_string().contains("plant.a[2]"), "{err}");
    }
}
