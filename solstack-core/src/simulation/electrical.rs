use crate::simulation::stack::LayerStack;
use solstack_schemas::result::ElectricalResult;

pub const IV_CURVE_POINTS: usize = 100;

// The thickness contribution to pce saturates here so that maximally thick
// stacks cannot push the efficiency past realistic bounds.
const PCE_THICKNESS_SATURATION_NM: f64 = 5000.0;

const BASE_PCE_PERCENT: f64 = 10.0;
const BASE_VOC_VOLTS: f64 = 0.6;
const BASE_JSC_MA_CM2: f64 = 20.0;

/// Computes the scalar electrical figures and the IV sweep for a stack.
///
/// Two stack aggregates drive everything: total thickness and the number of
/// distinct materials. All outputs are rounded to fixed precision (pce and
/// voc to 2 decimals, jsc to 1, IV samples to 4) so identical stacks produce
/// byte-identical records on every platform.
pub fn compute(stack: &LayerStack) -> ElectricalResult {
    let total_thickness_nm = f64::from(stack.total_thickness_nm());
    let diversity = stack.distinct_material_count() as f64;

    let pce = round_to(
        BASE_PCE_PERCENT
            + 0.1 * diversity
            + 0.005 * total_thickness_nm.min(PCE_THICKNESS_SATURATION_NM),
        2,
    );
    let voc = round_to(BASE_VOC_VOLTS + 0.01 * diversity, 2);
    let jsc = round_to(BASE_JSC_MA_CM2 + 0.02 * total_thickness_nm, 1);

    let iv_offset = 0.01 * total_thickness_nm / 1000.0;
    let iv_curve = (0..IV_CURVE_POINTS)
        .map(|i| round_to(0.05 * i as f64 + iv_offset, 4))
        .collect();

    ElectricalResult {
        pce,
        voc,
        jsc,
        iv_curve,
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{materials::MaterialStore, simulation::stack::Layer};
    use solstack_schemas::layer::{LayerRole, LayerSpec};

    fn stack(layers: &[(LayerRole, &str, u32)]) -> LayerStack {
        let store = MaterialStore::builtin();
        let layers = layers
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
        LayerStack::new(layers).unwrap()
    }

    fn reference_stack(absorber_nm: u32) -> LayerStack {
        stack(&[
            (LayerRole::Tco, "FTO", 50),
            (LayerRole::Etl, "TiO2", 30),
            (LayerRole::Absorber, "Si", absorber_nm),
        ])
    }

    #[test]
    fn iv_curve_has_exactly_one_hundred_points() {
        let result = compute(&reference_stack(300));
        assert_eq!(result.iv_curve.len(), IV_CURVE_POINTS);
    }

    #[test]
    fn known_stack_produces_the_expected_figures() {
        // 380 nm total, 3 distinct materials.
        let result = compute(&reference_stack(300));
        assert_eq!(result.pce, 12.2);
        assert_eq!(result.voc, 0.63);
        assert_eq!(result.jsc, 27.6);
        assert_eq!(result.iv_curve[0], 0.0038);
        assert_eq!(result.iv_curve[99], 4.9538);
    }

    #[test]
    fn thicker_absorber_does_not_lower_pce_or_jsc() {
        let thin = compute(&reference_stack(100));
        let thick = compute(&reference_stack(900));
        assert!(thick.pce >= thin.pce);
        assert!(thick.jsc >= thin.jsc);
    }

    #[test]
    fn more_distinct_materials_do_not_lower_pce_or_voc() {
        let two = compute(&stack(&[
            (LayerRole::Tco, "FTO", 50),
            (LayerRole::Etl, "TiO2", 30),
        ]));
        let three = compute(&stack(&[
            (LayerRole::Tco, "FTO", 50),
            (LayerRole::Etl, "TiO2", 30),
            (LayerRole::Absorber, "Si", 80),
        ]));
        assert!(three.voc >= two.voc);
    }

    #[test]
    fn outputs_are_finite_for_extreme_valid_stacks() {
        let result = compute(&stack(&[
            (LayerRole::Tco, "ITO", 1000),
            (LayerRole::Etl, "ZnO", 1000),
            (LayerRole::Absorber, "CdTe", 1000),
            (LayerRole::Htl, "NiO", 1000),
            (LayerRole::BackContact, "Mo", 1000),
            (LayerRole::Encapsulation, "Glass-Polymer", 1000),
        ]));
        assert!(result.pce.is_finite());
        assert!(result.voc.is_finite());
        assert!(result.jsc.is_finite());
        assert!(result.iv_curve.iter().all(|v| v.is_finite()));
        // Saturation clamp: the thickness term tops out at 5000 nm.
        assert_eq!(result.pce, 35.6);
    }

    #[test]
    fn identical_stacks_produce_identical_results() {
        assert_eq!(compute(&reference_stack(300)), compute(&reference_stack(300)));
    }
}
