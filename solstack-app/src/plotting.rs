//! This module is responsible for generating all visualizations from simulation results.

use anyhow::Result;
use plotters::prelude::*;
use solstack_core::simulation::{
    optical::{wavelength_domain, WAVELENGTH_MAX_NM, WAVELENGTH_MIN_NM},
    stack::LayerStack,
};
use solstack_schemas::result::SimulationResult;

/// The main function to generate and save all charts for a simulation run.
pub fn generate_all_plots(
    output_dir: &str,
    result: &SimulationResult,
    stack: &LayerStack,
) -> Result<()> {
    println!("[Plotting] Generating charts from simulation results...");

    plot_quantum_efficiency(output_dir, result)?;
    plot_absorption_spectrum(output_dir, result)?;
    plot_iv_curve(output_dir, result)?;
    plot_layer_thickness(output_dir, stack)?;

    println!("[Plotting] Charts have been saved to '{}'.", output_dir);
    Ok(())
}

/// Quantum efficiency vs wavelength over the fixed spectral domain.
fn plot_quantum_efficiency(output_dir: &str, result: &SimulationResult) -> Result<()> {
    let path = format!("{}/1_quantum_efficiency.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Quantum Efficiency vs Wavelength", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(WAVELENGTH_MIN_NM..WAVELENGTH_MAX_NM, 0f64..1f64)?;

    chart
        .configure_mesh()
        .x_desc("Wavelength (nm)")
        .y_desc("Quantum Efficiency")
        .draw()?;

    chart.draw_series(LineSeries::new(
        wavelength_domain()
            .into_iter()
            .zip(result.optical.quantum_efficiency.iter().cloned()),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// Absorption coefficient vs wavelength, when the optical model produced it.
fn plot_absorption_spectrum(output_dir: &str, result: &SimulationResult) -> Result<()> {
    let Some(absorption) = &result.optical.absorption else {
        return Ok(());
    };

    let path = format!("{}/2_absorption_spectrum.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_value = absorption.iter().cloned().fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Absorption Spectrum", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(
            WAVELENGTH_MIN_NM..WAVELENGTH_MAX_NM,
            0f64..(max_value * 1.1).max(1e-3),
        )?;

    chart
        .configure_mesh()
        .x_desc("Wavelength (nm)")
        .y_desc("Absorption Coefficient")
        .draw()?;

    chart.draw_series(LineSeries::new(
        wavelength_domain()
            .into_iter()
            .zip(absorption.iter().cloned()),
        GREEN.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// The simplified IV sweep from short-circuit to open-circuit conditions.
fn plot_iv_curve(output_dir: &str, result: &SimulationResult) -> Result<()> {
    let path = format!("{}/3_iv_curve.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let iv = &result.electrical.iv_curve;
    let max_value = iv.iter().cloned().fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("IV Curve", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..iv.len() as f64, 0f64..max_value * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Sweep point")
        .y_desc("Current")
        .draw()?;

    chart.draw_series(LineSeries::new(
        iv.iter().enumerate().map(|(i, v)| (i as f64, *v)),
        RED.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// One bar per layer, front of the cell on the left.
fn plot_layer_thickness(output_dir: &str, stack: &LayerStack) -> Result<()> {
    let path = format!("{}/4_layer_thickness.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let layers = stack.layers();
    let max_thickness = layers
        .iter()
        .map(|l| f64::from(l.thickness_nm()))
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Layer Thickness", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..layers.len() as f64 - 0.5, 0f64..max_thickness * 1.1)?;

    chart
        .configure_mesh()
        .x_labels(layers.len())
        .x_label_formatter(&|x| {
            let i = x.round() as usize;
            layers
                .get(i)
                .map(|l| l.role().to_string())
                .unwrap_or_default()
        })
        .x_desc("Layer")
        .y_desc("Thickness (nm)")
        .draw()?;

    chart.draw_series(layers.iter().enumerate().map(|(i, layer)| {
        Rectangle::new(
            [
                (i as f64 - 0.35, 0.0),
                (i as f64 + 0.35, f64::from(layer.thickness_nm())),
            ],
            RGBColor(135, 206, 235).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
