use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use solstack_schemas::file_formats::StackFile;

mod config;
mod plotting;
mod workflow;

/// Layered solar cell simulation engine.
#[derive(Parser)]
#[command(name = "solstack")]
struct Cli {
    /// Stack request YAML file describing the layer sequence to simulate
    #[arg(long, default_value = "solstack-app/request.yaml")]
    request: PathBuf,

    /// Directory of YAML files with material property overrides
    #[arg(long)]
    materials_dir: Option<PathBuf>,

    /// Base directory for timestamped run outputs
    #[arg(long, default_value = "./data/runs")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    println!("--- Solstack Application ---");

    let cli = Cli::parse();

    let request_str = fs::read_to_string(&cli.request)
        .with_context(|| format!("Failed to read {}", cli.request.display()))?;
    let request: StackFile = serde_yaml::from_str(&request_str)
        .with_context(|| format!("Failed to parse {}", cli.request.display()))?;

    let library = config::MaterialLibrary::load(cli.materials_dir.as_deref())?;

    let run_dir = cli
        .output_dir
        .join(format!("run_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {}", run_dir.display()))?;

    // Copy the request file to the output directory for traceability
    fs::copy(&cli.request, Path::new(&run_dir).join("request.yaml"))?;

    workflow::run_simulation(&request, &library, run_dir.to_str().unwrap())?;

    println!("\nSimulation complete. Results are in '{}'", run_dir.display());

    Ok(())
}
