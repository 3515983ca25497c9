use gravsim::{ScenarioConfig, Simulation};
use gravsim::run_3d;

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive N-body gravity sandbox")]
struct Args {
    /// Scenario file, looked up in the crate's scenarios/ directory unless it is an existing path
    #[arg(short, default_value = "earth_moon.yaml")]
    file_name: String,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.is_file() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let simulation = Simulation::build_scenario(&scenario_cfg).context("invalid scenario")?;

    run_3d(simulation);

    Ok(())
}
