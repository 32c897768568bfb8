use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use disk_scheduling::output::to_file;
use disk_scheduling::{
    Scenario, ScenarioReport, SimulationConfig, draw_schedule, parse_requests, render_report,
};

#[derive(Parser)]
#[command(name = "disk_scheduling")]
#[command(about = "Compare SSTF, SCAN and C-LOOK head movement on random cylinder requests", long_about = None)]
struct Cli {
    /// Number of independent scenarios to simulate
    #[arg(short, long, default_value_t = disk_scheduling::types::DEFAULT_SCENARIO_COUNT)]
    scenarios: usize,

    /// Random requests per scenario
    #[arg(short, long, default_value_t = disk_scheduling::types::DEFAULT_REQUEST_COUNT)]
    requests: usize,

    /// Seed for the request generator
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit comma separated requests, the first one is the head (runs a single scenario)
    #[arg(short, long)]
    cylinders: Option<String>,

    /// Directory to write one DOT file per scenario and algorithm into
    #[arg(long)]
    dot_dir: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Result<SimulationConfig> {
        let cylinders = match &self.cylinders {
            Some(raw) => Some(parse_requests(raw).context("Invalid --cylinders")?),
            None => None,
        };
        Ok(SimulationConfig {
            scenarios: self.scenarios,
            requests: self.requests,
            seed: self.seed,
            cylinders,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!("running {} scenario(s)", config.scenario_count());

    let mut scenario = Scenario::new();
    for i in 0..config.scenario_count() {
        match &config.cylinders {
            Some(cylinders) => scenario = Scenario::from_requests(cylinders),
            None => scenario.populate(&mut rng, config.requests),
        }

        let report = scenario
            .run()
            .with_context(|| format!("Scenario {} failed", i))?;
        print!("{}", render_report(&report));

        if let Some(dir) = &cli.dot_dir {
            write_dot_files(dir, i, &scenario, &report)?;
        }
    }

    Ok(())
}

fn write_dot_files(dir: &Path, index: usize, scenario: &Scenario, report: &ScenarioReport) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create {}", dir.display()))?;

    for schedule in &report.schedules {
        let dot_str = draw_schedule(scenario.ring(), schedule)?;
        let path = dir.join(format!("scenario{}_{}.dot", index, schedule.algorithm.slug()));
        to_file(&dot_str, &path).with_context(|| format!("Cannot write {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}
