use crate::{error::SolstackError, materials::MaterialStore};
use serde::Serialize;
use solstack_schemas::{
    layer::{LayerRole, LayerSpec},
    material::Toxicity,
};
use std::collections::HashSet;

pub const MIN_THICKNESS_NM: u32 = 10;
pub const MAX_THICKNESS_NM: u32 = 1000;

const MIN_LAYERS: usize = 2;

/// One resolved layer of the simulated device. Immutable once built; the
/// toxicity class and bandgap are copied out of the material store at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    role: LayerRole,
    material: String,
    thickness_nm: u32,
    toxicity: Toxicity,
    bandgap_ev: Option<f64>,
}

impl Layer {
    /// Builds a layer from a raw spec, resolving its toxicity through the
    /// store and enforcing the role catalog and thickness bounds.
    pub fn resolve(spec: &LayerSpec, store: &MaterialStore) -> Result<Self, SolstackError> {
        if !store.is_allowed(spec.role, &spec.material) {
            return Err(SolstackError::MaterialNotAllowed(
                spec.material.clone(),
                spec.role,
            ));
        }
        if spec.thickness_nm < MIN_THICKNESS_NM || spec.thickness_nm > MAX_THICKNESS_NM {
            return Err(SolstackError::ThicknessOutOfRange(spec.thickness_nm));
        }
        let properties = store.lookup(&spec.material);
        Ok(Self {
            role: spec.role,
            material: spec.material.clone(),
            thickness_nm: spec.thickness_nm,
            toxicity: properties.toxicity,
            bandgap_ev: properties.bandgap_ev,
        })
    }

    pub fn role(&self) -> LayerRole {
        self.role
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn thickness_nm(&self) -> u32 {
        self.thickness_nm
    }

    pub fn toxicity(&self) -> Toxicity {
        self.toxicity
    }

    pub fn bandgap_ev(&self) -> Option<f64> {
        self.bandgap_ev
    }
}

/// An ordered, validated front-to-back sequence of layers.
///
/// Construction is the validation boundary for structural invariants: length
/// within bounds, no duplicate roles, and roles in canonical order. Every
/// position-dependent computation downstream relies on the order being
/// preserved, so the layer list is never exposed mutably.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new(layers: Vec<Layer>) -> Result<Self, SolstackError> {
        if layers.len() < MIN_LAYERS || layers.len() > LayerRole::ALL.len() {
            return Err(SolstackError::StackSize(layers.len()));
        }

        let mut seen = HashSet::new();
        for layer in &layers {
            if !seen.insert(layer.role()) {
                return Err(SolstackError::DuplicateRole(layer.role()));
            }
        }

        let ordered = layers
            .windows(2)
            .all(|pair| pair[0].role().canonical_index() < pair[1].role().canonical_index());
        if !ordered {
            return Err(SolstackError::RoleOrder);
        }

        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_with_role(&self, role: LayerRole) -> Option<&Layer> {
        self.layers.iter().find(|l| l.role() == role)
    }

    pub fn total_thickness_nm(&self) -> u32 {
        self.layers.iter().map(Layer::thickness_nm).sum()
    }

    pub fn distinct_material_count(&self) -> usize {
        self.layers
            .iter()
            .map(Layer::material)
            .collect::<HashSet<_>>()
            .len()
    }
}
