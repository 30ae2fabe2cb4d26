use crate::config::MaterialLibrary;
use crate::plotting;
use anyhow::{Context, Result};
use solstack_core::{
    analysis::{self, Severity},
    simulation::builder::SimulationBuilder,
};
use solstack_schemas::file_formats::StackFile;
use std::{fs, path::Path};

/// Runs one full simulation cycle: build the stack, surface advisories, run
/// the engine, persist the JSON record and render the charts.
pub fn run_simulation(
    request: &StackFile,
    library: &MaterialLibrary,
    output_dir: &str,
) -> Result<()> {
    println!("\n--- [Workflow] Building layer stack ---");

    let spectrum_path = Path::new(output_dir).join("spectrum.csv");
    let mut engine = SimulationBuilder::new()
        .with_store(library.store.clone())
        .with_layers(request.layers.clone())
        .with_spectrum_logging_to_file(spectrum_path.to_str().unwrap())
        .build()?;

    for layer in engine.get_stack().layers() {
        println!(
            "  {} | {} | {} nm | toxicity: {}",
            layer.role(),
            layer.material(),
            layer.thickness_nm(),
            layer.toxicity().as_str(),
        );
    }

    for advisory in analysis::stack_advisories(engine.get_stack()) {
        if advisory.severity == Severity::Warning {
            println!(
                "  WARNING: {} may have environmental or health risks.",
                advisory.material
            );
        }
    }

    println!("\n--- [Workflow] Running simulation ---");
    let result = engine.run()?;

    match &result.feasibility.offending_pair {
        Some(pair) => println!(
            "Feasibility: the combination {} + {} may have poor interface compatibility.",
            pair.tco, pair.etl
        ),
        None => println!("Feasibility: basic checks passed."),
    }

    println!("PCE: {} %", result.electrical.pce);
    println!("Voc: {} V", result.electrical.voc);
    println!("Jsc: {} mA/cm2", result.electrical.jsc);
    if let Some(peak) = analysis::peak_quantum_efficiency(&result.optical) {
        println!(
            "Peak QE: {:.3} at ~{} nm",
            peak.value, peak.wavelength_nm as u32
        );
    }

    let record_path = Path::new(output_dir).join("simulation_output.json");
    let record_json = serde_json::to_string_pretty(&result.to_record())?;
    fs::write(&record_path, record_json)
        .with_context(|| format!("Failed to write {}", record_path.display()))?;

    plotting::generate_all_plots(output_dir, &result, engine.get_stack())?;

    Ok(())
}
