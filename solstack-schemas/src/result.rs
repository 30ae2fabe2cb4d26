use serde::{Deserialize, Serialize};

/// Outcome of the TCO/ETL interface compatibility pre-check. Advisory only;
/// a failed check never blocks the simulation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offending_pair: Option<MaterialPair>,
}

impl FeasibilityResult {
    pub fn passed() -> Self {
        Self {
            passed: true,
            offending_pair: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPair {
    pub tco: String,
    pub etl: String,
}

/// Wavelength-resolved optical response. Both curves are sampled over the
/// same implicit linear 300-900 nm domain and share the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalResult {
    pub quantum_efficiency: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absorption: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricalResult {
    /// Power conversion efficiency, percent.
    pub pce: f64,
    /// Open-circuit voltage, volts.
    pub voc: f64,
    /// Short-circuit current density, mA/cm2.
    pub jsc: f64,
    pub iv_curve: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub feasibility: FeasibilityResult,
    pub optical: OpticalResult,
    pub electrical: ElectricalResult,
}

impl SimulationResult {
    /// Flattens this result into the persisted output record.
    pub fn to_record(&self) -> SimulationRecord {
        SimulationRecord {
            pce: self.electrical.pce,
            voc: self.electrical.voc,
            jsc: self.electrical.jsc,
            iv_curve: self.electrical.iv_curve.clone(),
            quantum_efficiency: self.optical.quantum_efficiency.clone(),
            absorption: self.optical.absorption.clone(),
        }
    }
}

/// The flat JSON record written to durable storage, one per completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub pce: f64,
    pub voc: f64,
    pub jsc: f64,
    pub iv_curve: Vec<f64>,
    pub quantum_efficiency: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absorption: Option<Vec<f64>>,
}
