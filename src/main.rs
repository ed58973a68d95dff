use orbsim::{Control, Scenario, ScenarioConfig, Simulation, System};
use orbsim::{bench_euler, bench_gravity};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "circular.yaml")]
    file_name: String,

    /// Write sampled body states to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sample interval in ticks for CSV output
    #[arg(long, default_value_t = 1000)]
    sample_every: u64,

    /// Run the force/integrator micro-benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

/// One CSV row: a body's state at a sampled tick
#[derive(Serialize)]
struct SampleRow {
    tick: u64,
    t: f64,
    body: usize,
    x: f64,
    y: f64,
    z: f64,
    vx: f64,
    vy: f64,
    vz: f64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn record_samples(samples: &mut Vec<SampleRow>, tick: u64, system: &System) {
    for (i, b) in system.bodies.iter().enumerate() {
        samples.push(SampleRow {
            tick,
            t: system.t,
            body: i,
            x: b.x.x,
            y: b.x.y,
            z: b.x.z,
            vx: b.v.x,
            vy: b.v.y,
            vz: b.v.z,
        });
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_euler()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let mut sim = Simulation::new(scenario)?;

    let sample_every = args.sample_every.max(1);
    let mut samples: Vec<SampleRow> = Vec::new();

    let outcome = sim.run(|tick, system| {
        if tick % sample_every == 0 {
            record_samples(&mut samples, tick, system);
        }
        Control::Continue
    })?;

    info!(
        "run finished: {} ticks, t = {:.6}, cancelled = {}",
        outcome.ticks, outcome.t, outcome.cancelled
    );

    if let Some(path) = &args.output {
        let mut writer =
            csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
        for row in &samples {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("wrote {} samples to {}", samples.len(), path.display());
    } else {
        // No renderer attached; print the final body states instead
        for (i, b) in sim.system().bodies.iter().enumerate() {
            println!(
                "body {i}: x = ({:.6}, {:.6}, {:.6}), v = ({:.6}, {:.6}, {:.6})",
                b.x.x, b.x.y, b.x.z, b.v.x, b.v.y, b.v.z
            );
        }
    }

    Ok(())
}
