use crate::{
    error::SolstackError,
    logger::SpectrumLogger,
    materials::MaterialStore,
    simulation::{
        engine::SimulationEngine,
        stack::{Layer, LayerStack},
    },
};
use solstack_schemas::layer::{LayerRole, LayerSpec};

/// A fluent builder for constructing a `SimulationEngine`.
///
/// The builder is the validation boundary between raw user input and the
/// engine: it resolves every layer against the material store and rejects
/// structurally invalid stacks before any simulation runs.
#[derive(Default)]
pub struct SimulationBuilder {
    layers: Vec<LayerSpec>,
    store: Option<MaterialStore>,
    log_path: Option<String>,
}

impl SimulationBuilder {
    /// Creates a new, empty `SimulationBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the material store used to resolve layer properties. Defaults to
    /// the built-in material table.
    pub fn with_store(mut self, store: MaterialStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Appends one layer to the stack under construction.
    pub fn with_layer(mut self, role: LayerRole, material: &str, thickness_nm: u32) -> Self {
        self.layers.push(LayerSpec {
            role,
            material: material.to_string(),
            thickness_nm,
        });
        self
    }

    /// Appends a whole sequence of layer specs, front-to-back.
    pub fn with_layers(mut self, layers: Vec<LayerSpec>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// Configures the engine to write the spectral curves to the specified
    /// CSV file after each run.
    pub fn with_spectrum_logging_to_file(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a fully configured `SimulationEngine`.
    ///
    /// # Errors
    ///
    /// Returns a `SolstackError` if no layers were provided, if a layer uses
    /// a material outside its role catalog or an out-of-range thickness, or
    /// if the stack violates a structural invariant (size, duplicate roles,
    /// canonical order).
    pub fn build(self) -> Result<SimulationEngine, SolstackError> {
        if self.layers.is_empty() {
            return Err(SolstackError::NoLayerProvided);
        }

        let store = self.store.unwrap_or_default();
        let layers = self
            .layers
            .iter()
            .map(|spec| Layer::resolve(spec, &store))
            .collect::<Result<Vec<_>, _>>()?;
        let stack = LayerStack::new(layers)?;

        let logger = match self.log_path {
            Some(path) => Some(
                SpectrumLogger::new(&path).map_err(|e| SolstackError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        Ok(SimulationEngine { stack, logger })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_an_empty_stack() {
        let err = SimulationBuilder::new().build().unwrap_err();
        assert!(matches!(err, SolstackError::NoLayerProvided));
    }

    #[test]
    fn build_validates_layer_specs() {
        let err = SimulationBuilder::new()
            .with_layer(LayerRole::Tco, "FTO", 50)
            .with_layer(LayerRole::Etl, "Si", 30)
            .build()
            .unwrap_err();
        assert!(matches!(err, SolstackError::MaterialNotAllowed(_, LayerRole::Etl)));
    }

    #[test]
    fn build_produces_an_engine_for_a_valid_stack() {
        let engine = SimulationBuilder::new()
            .with_layer(LayerRole::Tco, "FTO", 50)
            .with_layer(LayerRole::Etl, "TiO2", 30)
            .with_layer(LayerRole::Absorber, "Si", 300)
            .build()
            .unwrap();
        assert_eq!(engine.get_stack().total_thickness_nm(), 380);
        // The engine is inspectable in test failure output.
        assert!(format!("{engine:?}").contains("SimulationEngine"));
    }

    #[test]
    fn build_accepts_materials_registered_through_overrides() {
        use solstack_schemas::material::{MaterialRecord, Toxicity};

        let records = vec![MaterialRecord {
            material_id: "GaAs".to_string(),
            bandgap_ev: Some(1.42),
            toxicity: Toxicity::Medium,
            role: Some(LayerRole::Absorber),
        }];
        let mut engine = SimulationBuilder::new()
            .with_store(MaterialStore::with_overrides(&records))
            .with_layer(LayerRole::Tco, "FTO", 50)
            .with_layer(LayerRole::Absorber, "GaAs", 300)
            .build()
            .unwrap();
        let result = engine.run().unwrap();
        assert!(result.electrical.pce > 0.0);
    }
}
