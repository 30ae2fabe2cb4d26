use crate::simulation::{optical::wavelength_domain, stack::LayerStack};
use serde::{Deserialize, Serialize};
use solstack_schemas::{layer::LayerRole, material::Toxicity, result::OpticalResult};

/// Severity of a toxicity advisory, for display purposes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Notice,
    Warning,
}

/// Pure lookup table from toxicity class to advisory severity. Unknown
/// toxicity is a non-blocking, low-severity case for display, while staying
/// a real enum value for matching logic elsewhere.
pub fn advisory_severity(toxicity: Toxicity) -> Severity {
    match toxicity {
        Toxicity::Low => Severity::Info,
        Toxicity::Medium => Severity::Notice,
        Toxicity::High => Severity::Warning,
        Toxicity::Unknown => Severity::Info,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToxicityAdvisory {
    pub role: LayerRole,
    pub material: String,
    pub toxicity: Toxicity,
    pub severity: Severity,
}

/// One advisory per layer, front-to-back, for the caller to render before
/// the simulation runs.
pub fn stack_advisories(stack: &LayerStack) -> Vec<ToxicityAdvisory> {
    stack
        .layers()
        .iter()
        .map(|layer| ToxicityAdvisory {
            role: layer.role(),
            material: layer.material().to_string(),
            toxicity: layer.toxicity(),
            severity: advisory_severity(layer.toxicity()),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QePeak {
    pub wavelength_nm: f64,
    pub value: f64,
}

/// Finds the peak of the quantum-efficiency curve and the wavelength it sits
/// at. Returns `None` for an empty curve; samples beyond the fixed spectral
/// domain are ignored rather than faulted on.
pub fn peak_quantum_efficiency(optical: &OpticalResult) -> Option<QePeak> {
    wavelength_domain()
        .into_iter()
        .zip(optical.quantum_efficiency.iter())
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(wavelength_nm, value)| QePeak {
            wavelength_nm,
            value: *value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        materials::MaterialStore,
        simulation::{optical, stack::Layer},
    };
    use solstack_schemas::layer::LayerSpec;

    #[test]
    fn severity_table() {
        assert_eq!(advisory_severity(Toxicity::Low), Severity::Info);
        assert_eq!(advisory_severity(Toxicity::Medium), Severity::Notice);
        assert_eq!(advisory_severity(Toxicity::High), Severity::Warning);
        assert_eq!(advisory_severity(Toxicity::Unknown), Severity::Info);
    }

    #[test]
    fn advisories_cover_every_layer_in_order() {
        let store = MaterialStore::builtin();
        let layers = [
            (LayerRole::Tco, "FTO", 50),
            (LayerRole::Absorber, "CdTe", 300),
        ]
        .iter()
        .map(|(role, material, thickness_nm)| {
            Layer::resolve(
                &LayerSpec {
                    role: *role,
                    material: (*material).to_string(),
                    thickness_nm: *thickness_nm,
                },
                &store,
            )
            .unwrap()
        })
        .collect();
        let stack = LayerStack::new(layers).unwrap();

        let advisories = stack_advisories(&stack);
        assert_eq!(advisories.len(), 2);
        assert_eq!(advisories[0].severity, Severity::Info);
        assert_eq!(advisories[1].material, "CdTe");
        assert_eq!(advisories[1].severity, Severity::Warning);
    }

    #[test]
    fn peak_sits_inside_the_domain() {
        let store = MaterialStore::builtin();
        let layers = [
            (LayerRole::Tco, "FTO", 50),
            (LayerRole::Absorber, "Si", 300),
        ]
        .iter()
        .map(|(role, material, thickness_nm)| {
            Layer::resolve(
                &LayerSpec {
                    role: *role,
                    material: (*material).to_string(),
                    thickness_nm: *thickness_nm,
                },
                &store,
            )
            .unwrap()
        })
        .collect();
        let stack = LayerStack::new(layers).unwrap();

        let peak = peak_quantum_efficiency(&optical::compute(&stack)).unwrap();
        assert!(peak.wavelength_nm >= 300.0 && peak.wavelength_nm <= 900.0);
        assert!(peak.value > 0.0);
    }

    #[test]
    fn hand_built_curves_of_any_length_are_handled() {
        let empty = OpticalResult {
            quantum_efficiency: vec![],
            absorption: None,
        };
        assert!(peak_quantum_efficiency(&empty).is_none());

        // A curve longer than the spectral domain is clipped to it.
        let oversized = OpticalResult {
            quantum_efficiency: vec![0.5; 250],
            absorption: None,
        };
        let peak = peak_quantum_efficiency(&oversized).unwrap();
        assert!(peak.wavelength_nm >= 300.0 && peak.wavelength_nm <= 900.0);
        assert_eq!(peak.value, 0.5);
    }
}
