use ss_project::schema::*;
use ss_project::{
    ProjectError, load_json, load_scenario, load_yaml, save_json, save_yaml, validate_scenario,
};
use std::path::{Path, PathBuf};

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/scenarios")
}

#[test]
fn roundtrip_yaml_reference() {
    let scenario = Scenario::reference();
    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("ss_project_roundtrip_reference.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn roundtrip_json_without_lqr() {
    let scenario = Scenario {
        name: "Open loop only".to_string(),
        lqr: None,
        ..Scenario::reference()
    };

    let path = std::env::temp_dir().join("ss_project_roundtrip_open_loop.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_scenario(&path).unwrap();

    assert_eq!(scenario, loaded);
    assert!(loaded.lqr.is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_rejects_invalid_scenario() {
    let mut scenario = Scenario::reference();
    scenario.run.dt = 0.0;

    let path = std::env::temp_dir().join("ss_project_invalid.yaml");
    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn load_rejects_zero_r() {
    let yaml = "\
version: 1
name: bad
plant:
  a: [0.0, 1.0, -3.0, -2.0]
  b: [0.0, 1.0]
  c: [1.0, 0.0]
run:
  t_end: 1.0
lqr:
  q: [1.0, 0.0, 0.0, 2.0]
  r: 0.0
";
    let path = std::env::temp_dir().join("ss_project_zero_r.yaml");
    std::fs::write(&path, yaml).unwrap();
    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)), "{err}");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_yaml(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}

#[test]
fn demo_scenarios_load_and_validate() {
    let reference = load_scenario(&demos_dir().join("reference.yaml")).unwrap();
    assert_eq!(reference.plant, Scenario::reference().plant);
    assert_eq!(reference.run, Scenario::reference().run);
    assert_eq!(reference.lqr, Scenario::reference().lqr);

    let saddle = load_scenario(&demos_dir().join("saddle_regulator.yaml")).unwrap();
    assert_eq!(saddle.run.u, 0.0);

    let stiff = load_json(&demos_dir().join("stiff_weights.json")).unwrap();
    assert_eq!(stiff.run.dt, 0.01);
    let lqr = stiff.lqr.unwrap();
    assert_eq!(lqr.r, 1.0);
    assert_eq!(lqr.solver.max_iterations, 200);
    assert_eq!(lqr.solver.tolerance, 1e-6);
}

#[test]
fn stiff_demo_gain_converges() {
    let scenario = load_scenario(&demos_dir().join("stiff_weights.json")).unwrap();
    let lqr = scenario.lqr.as_ref().unwrap();
    let system = scenario.plant.state_space();

    let gain = ss_controls::lqr_with_config(
        &system.a,
        &system.b,
        &lqr.q_matrix(),
        lqr.r,
        &lqr.riccati_config(),
    )
    .unwrap();
    assert!(gain.converged());
    assert!(gain.riccati.iterations < 200);
}
