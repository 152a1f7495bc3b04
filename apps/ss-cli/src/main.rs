mod error;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use ss_controls::{
    ConvergenceStatus, LqrGain, LqrWeights, lqr_with_config, riccati_residual, sweep_lqr,
};
use ss_core::Stopwatch;
use ss_project::{LqrDef, Scenario, load_scenario};
use ss_results::{OutputFormat, write_trajectory, write_trajectory_file};
use ss_sim::{ResponseCharacteristics, Trajectory, simulate, simulate_closed_loop};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ss-cli")]
#[command(about = "State-space step responses and LQR design for 2x2 plants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the built-in reference plant and write its response
    Demo {
        /// Output file
        #[arg(short, long, default_value = "outputs.txt")]
        output: PathBuf,
        /// text, csv or jsonl (defaults to the output extension)
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
    },
    /// Simulate a scenario file
    Simulate {
        /// Path to the scenario YAML or JSON file
        scenario: PathBuf,
        /// Close the loop with the scenario's LQR gain
        #[arg(long)]
        closed_loop: bool,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// text, csv or jsonl (defaults to the output extension)
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
    },
    /// Design the LQR gain of a scenario
    Lqr {
        /// Path to the scenario YAML or JSON file
        scenario: PathBuf,
    },
    /// Design LQR gains over a grid of R values and Q scalings
    Sweep {
        /// Path to the scenario YAML or JSON file
        scenario: PathBuf,
        /// Input weights, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        r: Vec<f64>,
        /// Factors applied to the scenario's Q, comma separated
        #[arg(long, value_delimiter = ',', default_value = "1.0")]
        q_scale: Vec<f64>,
    },
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario: PathBuf,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { output, format } => cmd_demo(&output, format),
        Commands::Simulate {
            scenario,
            closed_loop,
            output,
            format,
        } => cmd_simulate(&scenario, closed_loop, output.as_deref(), format),
        Commands::Lqr { scenario } => cmd_lqr(&scenario),
        Commands::Sweep {
            scenario,
            r,
            q_scale,
        } => cmd_sweep(&scenario, &r, &q_scale),
        Commands::Validate { scenario } => cmd_validate(&scenario),
    }
}

fn cmd_demo(output: &Path, format: Option<OutputFormat>) -> CliResult<()> {
    println!("Welcome!");
    run_scenario(&Scenario::reference(), false, Some(output), format)?;
    println!("Done, see {} file.", output.display());
    Ok(())
}

fn cmd_simulate(
    scenario_path: &Path,
    closed_loop: bool,
    output: Option<&Path>,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    info!(path = %scenario_path.display(), "loading scenario");
    let scenario = load_scenario(scenario_path)?;
    run_scenario(&scenario, closed_loop, output, format)
}

fn cmd_lqr(scenario_path: &Path) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let lqr = require_lqr(&scenario)?;
    let system = scenario.plant.state_space();
    let q = lqr.q_matrix();

    let timer = Stopwatch::new();
    let gain = lqr_with_config(&system.a, &system.b, &q, lqr.r, &lqr.riccati_config())?;
    let elapsed_us = timer.elapsed_us();

    let p = gain.riccati.p;
    let residual = riccati_residual(&system.a, &system.b, &q, lqr.r, &p)?;
    let a_cl = system.closed_loop(&gain.k).a;

    println!("LQR design for: {}", scenario.name);
    println!("  K = [{:.6}, {:.6}]", gain.k[0], gain.k[1]);
    println!(
        "  P = [{:.6}, {:.6}; {:.6}, {:.6}]",
        p[0], p[1], p[2], p[3]
    );
    println!("  Status: {}", status_label(gain.riccati.status));
    println!(
        "  Iterations: {} ({} Newton)",
        gain.riccati.iterations, gain.riccati.newton_steps
    );
    println!("  Final step size: {}", gain.riccati.relaxation);
    println!("  Riccati residual: {:.3e}", residual);
    println!(
        "  A - B K' = [{:.6}, {:.6}; {:.6}, {:.6}]",
        a_cl[0], a_cl[1], a_cl[2], a_cl[3]
    );
    println!("  Time elapsed: {elapsed_us}us");
    Ok(())
}

fn cmd_sweep(scenario_path: &Path, r_values: &[f64], q_scales: &[f64]) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let lqr = require_lqr(&scenario)?;
    let system = scenario.plant.state_space();

    let mut grid = Vec::with_capacity(r_values.len() * q_scales.len());
    for &scale in q_scales {
        for &r in r_values {
            grid.push(LqrWeights::new(lqr.q_matrix() * scale, r));
        }
    }
    info!(points = grid.len(), "starting LQR sweep");

    let timer = Stopwatch::new();
    let results = sweep_lqr(&system.a, &system.b, &grid, &lqr.riccati_config());
    let elapsed_ms = timer.elapsed_ms();

    println!("LQR sweep for: {}", scenario.name);
    println!(
        "  {:>10} {:>10} {:>12} {:>12} {:>10} {:>20}",
        "q_scale", "r", "k0", "k1", "iters", "status"
    );
    let scales = q_scales.iter().flat_map(|s| std::iter::repeat_n(*s, r_values.len()));
    for ((scale, weights), result) in scales.zip(&grid).zip(&results) {
        match result {
            Ok(gain) => print_sweep_row(scale, weights.r, gain),
            Err(e) => println!("  {:>10} {:>10}  failed: {}", scale, weights.r, e),
        }
    }
    println!("  Time elapsed: {elapsed_ms}ms");
    Ok(())
}

fn print_sweep_row(scale: f64, r: f64, gain: &LqrGain) {
    println!(
        "  {:>10} {:>10} {:>12.6} {:>12.6} {:>10} {:>20}",
        scale,
        r,
        gain.k[0],
        gain.k[1],
        gain.riccati.iterations,
        status_label(gain.riccati.status)
    );
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    let samples = scenario.run.sim_options().step_count()?;
    println!("✓ Scenario is valid");
    println!("  Name: {}", scenario.name);
    println!("  Samples: {}", samples);
    println!(
        "  LQR: {}",
        if scenario.lqr.is_some() { "yes" } else { "no" }
    );
    Ok(())
}

fn require_lqr(scenario: &Scenario) -> CliResult<&LqrDef> {
    scenario.lqr.as_ref().ok_or_else(|| {
        CliError::InvalidInput(format!("scenario '{}' has no lqr section", scenario.name))
    })
}

fn status_label(status: ConvergenceStatus) -> &'static str {
    match status {
        ConvergenceStatus::Converged => "converged",
        ConvergenceStatus::IterationsExhausted => "iterations exhausted",
    }
}

/// Simulate `scenario` and write the trajectory to `output`, or stdout when
/// no output is given. Reports go to stderr in the latter case so the data
/// stream stays clean.
fn run_scenario(
    scenario: &Scenario,
    closed_loop: bool,
    output: Option<&Path>,
    format: Option<OutputFormat>,
) -> CliResult<()> {
    let mut report: Box<dyn Write> = match output {
        Some(_) => Box::new(io::stdout()),
        None => Box::new(io::stderr()),
    };

    let system = scenario.plant.state_space();
    let run = &scenario.run;
    let opts = run.sim_options();

    let mut timer = Stopwatch::new();
    let trajectory = if closed_loop {
        let lqr = require_lqr(scenario)?;
        let gain = lqr_with_config(
            &system.a,
            &system.b,
            &lqr.q_matrix(),
            lqr.r,
            &lqr.riccati_config(),
        )?;
        writeln!(
            report,
            "LQR gain K = [{:.6}, {:.6}] ({}, {} iterations, {}us)",
            gain.k[0],
            gain.k[1],
            status_label(gain.riccati.status),
            gain.riccati.iterations,
            timer.elapsed_us()
        )?;
        timer.reset();
        simulate_closed_loop(&system, &gain.k, run.initial_state(), run.u, &opts)?
    } else {
        simulate(&system, run.initial_state(), run.u, &opts)?
    };
    let elapsed_us = timer.elapsed_us();

    match output {
        Some(path) => {
            let format = format
                .or_else(|| OutputFormat::from_path(path))
                .unwrap_or_default();
            write_trajectory_file(path, &trajectory, format)?;
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            write_trajectory(&mut writer, &trajectory, format.unwrap_or_default())?;
            writer.flush()?;
        }
    }

    writeln!(report, "Samples: {}", trajectory.len())?;
    print_characteristics(&mut report, &trajectory, run.u)?;
    writeln!(report, "Time elapsed: {elapsed_us}us")?;
    Ok(())
}

fn print_characteristics(
    report: &mut dyn Write,
    trajectory: &Trajectory,
    reference: f64,
) -> io::Result<()> {
    let Some(resp) = ResponseCharacteristics::from_trajectory(trajectory, reference) else {
        return Ok(());
    };
    writeln!(report, "Response:")?;
    writeln!(report, "  Peak time: {:.3} s", resp.peak_time)?;
    writeln!(report, "  y max: {:.6}", resp.y_max)?;
    writeln!(report, "  Overshoot: {:.2}%", resp.overshoot_percent)?;
    writeln!(report, "  y ss: {:.6}", resp.y_ss)?;
    writeln!(report, "  Steady-state error: {:.6}", resp.steady_state_error)?;
    Ok(())
}
