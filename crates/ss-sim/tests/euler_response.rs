//! Open- and closed-loop responses of the reference plant.

use ss_controls::lqr;
use ss_linalg::{ColumnVector2, Matrix2x2, RowVector2};
use ss_sim::{SimError, SimOptions, StateSpace, simulate, simulate_closed_loop};

fn reference_system() -> StateSpace {
    StateSpace::new(
        Matrix2x2::new(0.0, 1.0, -3.0, -2.0),
        ColumnVector2::new(0.0, 1.0),
        RowVector2::new(1.0, 0.0),
    )
}

fn unstable_system() -> StateSpace {
    // Eigenvalues 1 and -2.
    StateSpace::new(
        Matrix2x2::new(0.0, 1.0, 2.0, -1.0),
        ColumnVector2::new(0.0, 1.0),
        RowVector2::new(1.0, 0.0),
    )
}

#[test]
fn first_euler_steps_match_hand_computation() {
    let traj = simulate(
        &reference_system(),
        ColumnVector2::zeros(),
        1.0,
        &SimOptions::new(0.01, 1.0),
    )
    .unwrap();

    let s = traj.samples();
    assert_eq!(s[0].x, ColumnVector2::zeros());
    assert_eq!(s[0].y, 0.0);

    assert!((s[1].x[0] - 0.0).abs() < 1e-9);
    assert!((s[1].x[1] - 0.01).abs() < 1e-9);

    assert!((s[2].x[0] - 0.0001).abs() < 1e-9);
    assert!((s[2].x[1] - 0.0198).abs() < 1e-9);
    assert!((s[2].y - 0.0001).abs() < 1e-9);
}

#[test]
fn sample_count_is_rounded_horizon() {
    let traj = simulate(
        &reference_system(),
        ColumnVector2::zeros(),
        1.0,
        &SimOptions::new(0.01, 160.0),
    )
    .unwrap();
    assert_eq!(traj.len(), 16_000);
    let last = traj.last().unwrap();
    assert!((last.t - 159.99).abs() < 1e-9);
}

#[test]
fn empty_horizon_yields_no_samples() {
    let traj = simulate(
        &reference_system(),
        ColumnVector2::zeros(),
        1.0,
        &SimOptions::new(0.01, 0.0),
    )
    .unwrap();
    assert!(traj.is_empty());
    assert_eq!(traj.len(), 0);
}

#[test]
fn invalid_step_is_rejected() {
    for dt in [0.0, -0.01] {
        let err = simulate(
            &reference_system(),
            ColumnVector2::zeros(),
            1.0,
            &SimOptions::new(dt, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }
}

#[test]
fn overflowing_state_is_reported() {
    let sys = StateSpace::new(
        Matrix2x2::diagonal(1.0e6, 1.0e6),
        ColumnVector2::zeros(),
        RowVector2::new(1.0, 0.0),
    );
    let err = simulate(
        &sys,
        ColumnVector2::new(1.0, 1.0),
        0.0,
        &SimOptions::new(1.0, 100.0),
    )
    .unwrap_err();
    assert!(matches!(err, SimError::NonFinite { .. }));
}

#[test]
fn repeated_runs_are_bit_identical() {
    let opts = SimOptions::new(0.01, 20.0);
    let a = simulate(&reference_system(), ColumnVector2::new(0.5, -0.5), 1.0, &opts).unwrap();
    let b = simulate(&reference_system(), ColumnVector2::new(0.5, -0.5), 1.0, &opts).unwrap();
    assert_eq!(a, b);
    for (sa, sb) in a.iter().zip(&b) {
        assert_eq!(sa.x[0].to_bits(), sb.x[0].to_bits());
        assert_eq!(sa.x[1].to_bits(), sb.x[1].to_bits());
        assert_eq!(sa.y.to_bits(), sb.y.to_bits());
    }
}

#[test]
fn zero_gain_closed_loop_matches_open_loop() {
    let opts = SimOptions::new(0.01, 5.0);
    let open = simulate(&reference_system(), ColumnVector2::zeros(), 1.0, &opts).unwrap();
    let closed = simulate_closed_loop(
        &reference_system(),
        &ColumnVector2::zeros(),
        ColumnVector2::zeros(),
        1.0,
        &opts,
    )
    .unwrap();
    assert_eq!(open, closed);
}

#[test]
fn lqr_gain_regulates_unstable_plant() {
    let sys = unstable_system();
    let k = lqr(&sys.a, &sys.b, &Matrix2x2::diagonal(1.0, 2.0), 1.0).unwrap();
    let opts = SimOptions::new(0.01, 10.0);
    let x0 = ColumnVector2::new(1.0, 0.0);

    let open = simulate(&sys, x0, 0.0, &opts).unwrap();
    let closed = simulate_closed_loop(&sys, &k, x0, 0.0, &opts).unwrap();

    let open_norm = open.last().unwrap().x.norm();
    let closed_norm = closed.last().unwrap().x.norm();
    assert!(open_norm > 1.0e3, "open {open_norm}");
    assert!(closed_norm < 1.0e-2, "closed {closed_norm}");
}

#[test]
fn lqr_gain_shrinks_reference_state_norm() {
    let sys = reference_system();
    let k = lqr(&sys.a, &sys.b, &Matrix2x2::diagonal(1.0, 2.0), 1.0).unwrap();
    let opts = SimOptions::new(0.01, 10.0);

    let open = simulate(&sys, ColumnVector2::zeros(), 1.0, &opts).unwrap();
    let closed = simulate_closed_loop(&sys, &k, ColumnVector2::zeros(), 1.0, &opts).unwrap();

    let open_norm = open.last().unwrap().x.norm();
    let closed_norm = closed.last().unwrap().x.norm();
    assert!(closed_norm < open_norm, "closed {closed_norm} open {open_norm}");
}
