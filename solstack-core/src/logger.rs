use crate::simulation::optical::wavelength_domain;
use csv::Writer;
use serde::Serialize;
use solstack_schemas::result::OpticalResult;
use std::fs;
use std::io;

#[derive(Debug, Serialize)]
struct SpectrumRow {
    wavelength_nm: f64,
    quantum_efficiency: f64,
    absorption: Option<f64>,
}

/// Writes the wavelength-resolved curves of a run to a CSV file, one row per
/// sample of the spectral domain.
#[derive(Debug)]
pub struct SpectrumLogger {
    writer: Writer<fs::File>,
}

impl SpectrumLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_spectrum(&mut self, optical: &OpticalResult) -> Result<(), anyhow::Error> {
        for (i, wavelength_nm) in wavelength_domain().into_iter().enumerate() {
            let row = SpectrumRow {
                wavelength_nm,
                quantum_efficiency: optical.quantum_efficiency[i],
                absorption: optical.absorption.as_ref().map(|a| a[i]),
            };
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
