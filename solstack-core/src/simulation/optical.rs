use crate::simulation::stack::LayerStack;
use solstack_schemas::{layer::LayerRole, result::OpticalResult};

pub const WAVELENGTH_MIN_NM: f64 = 300.0;
pub const WAVELENGTH_MAX_NM: f64 = 900.0;
pub const SPECTRUM_SAMPLES: usize = 100;

// Saturation scale of the absorber thickness response, and the cap on the
// achievable peak quantum efficiency.
const ABSORBER_SATURATION_NM: f64 = 250.0;
const PEAK_QE_LIMIT: f64 = 0.95;

// Width of the spectral response around the bandgap-derived peak, and the
// peak used when the absorber bandgap is unknown.
const RESPONSE_WIDTH_NM: f64 = 150.0;
const DEFAULT_PEAK_NM: f64 = 550.0;

/// The linear wavelength grid shared by the quantum-efficiency and
/// absorption curves, endpoints included.
pub fn wavelength_domain() -> Vec<f64> {
    let step = (WAVELENGTH_MAX_NM - WAVELENGTH_MIN_NM) / (SPECTRUM_SAMPLES - 1) as f64;
    (0..SPECTRUM_SAMPLES)
        .map(|i| WAVELENGTH_MIN_NM + i as f64 * step)
        .collect()
}

/// Computes the wavelength-resolved optical response of a stack.
///
/// The model is a deliberately simplified analytic stand-in, not real thin
/// film optics: a Gaussian spectral response centered at the absorber's
/// bandgap wavelength (1240/Eg nm, clamped to the domain), with a peak that
/// saturates exponentially in absorber thickness. A stack without an
/// absorber yields an all-zero curve. The peak is monotonically
/// non-decreasing in absorber thickness, and every sample lies in [0, 1].
pub fn compute(stack: &LayerStack) -> OpticalResult {
    let absorber = stack.layer_with_role(LayerRole::Absorber);

    let absorber_thickness_nm = absorber.map_or(0.0, |l| f64::from(l.thickness_nm()));
    let peak_qe =
        PEAK_QE_LIMIT * (1.0 - (-absorber_thickness_nm / ABSORBER_SATURATION_NM).exp());

    let peak_nm = absorber
        .and_then(|l| l.bandgap_ev())
        .map_or(DEFAULT_PEAK_NM, |eg| {
            (1240.0 / eg).clamp(WAVELENGTH_MIN_NM, WAVELENGTH_MAX_NM)
        });

    let quantum_efficiency: Vec<f64> = wavelength_domain()
        .iter()
        .map(|wavelength| {
            let offset = (wavelength - peak_nm) / RESPONSE_WIDTH_NM;
            (peak_qe * (-0.5 * offset * offset).exp()).clamp(0.0, 1.0)
        })
        .collect();

    // Absorption coefficient curve: the same spectral shape scaled by the
    // total stack thickness in micrometers.
    let total_thickness_um = f64::from(stack.total_thickness_nm()) / 1000.0;
    let absorption = quantum_efficiency
        .iter()
        .map(|qe| qe * total_thickness_um)
        .collect();

    OpticalResult {
        quantum_efficiency,
        absorption: Some(absorption),
    }
}
