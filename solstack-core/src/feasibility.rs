use crate::simulation::stack::LayerStack;
use solstack_schemas::{
    layer::LayerRole,
    result::{FeasibilityResult, MaterialPair},
};

// Known-good TCO/ETL interface pairings.
const COMPATIBLE_TCO_ETL: &[(&str, &str)] = &[("FTO", "TiO2"), ("FTO", "SnO2"), ("AZO", "ZnO")];

/// Pure pairwise compatibility pre-check for the TCO/ETL interface.
///
/// Advisory by design: the orchestrator surfaces the outcome to the caller
/// but never blocks the simulation on it. A stack missing either role passes
/// trivially.
pub fn check(stack: &LayerStack) -> FeasibilityResult {
    let tco = stack.layer_with_role(LayerRole::Tco);
    let etl = stack.layer_with_role(LayerRole::Etl);

    match (tco, etl) {
        (Some(tco), Some(etl)) => {
            let pair = (tco.material(), etl.material());
            if COMPATIBLE_TCO_ETL.contains(&pair) {
                FeasibilityResult::passed()
            } else {
                FeasibilityResult {
                    passed: false,
                    offending_pair: Some(MaterialPair {
                        tco: tco.material().to_string(),
                        etl: etl.material().to_string(),
                    }),
                }
            }
        }
        _ => FeasibilityResult::passed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{materials::MaterialStore, simulation::stack::Layer};
    use solstack_schemas::layer::LayerSpec;

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

    #[test]
    fn whitelisted_pair_passes() {
        let result = check(&stack(&[
            (LayerRole::Tco, "FTO", 50),
            (LayerRole::Etl, "TiO2", 30),
        ]));
        assert!(result.passed);
        assert!(result.offending_pair.is_none());
    }

    #[test]
    fn unlisted_pair_fails_with_the_offending_pair() {
        let result = check(&stack(&[
            (LayerRole::Tco, "ITO", 50),
            (LayerRole::Etl, "ZnO", 30),
        ]));
        assert!(!result.passed);
        let pair = result.offending_pair.unwrap();
        assert_eq!(pair.tco, "ITO");
        assert_eq!(pair.etl, "ZnO");
    }

    #[test]
    fn missing_tco_or_etl_passes_trivially() {
        let result = check(&stack(&[
            (LayerRole::Etl, "ZnO", 30),
            (LayerRole::Absorber, "Si", 300),
        ]));
        assert!(result.passed);

        let result = check(&stack(&[
            (LayerRole::Absorber, "Si", 300),
            (LayerRole::BackContact, "Al", 100),
        ]));
        assert!(result.passed);
    }
}
