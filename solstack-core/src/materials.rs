use solstack_schemas::{
    layer::LayerRole,
    material::{MaterialProperties, MaterialRecord, Toxicity},
};
use std::collections::HashMap;

/// Read-only store of material properties, loaded once per process.
///
/// Lookups never fail: identifiers that are not in the store resolve to the
/// sentinel record (no bandgap, `Toxicity::Unknown`) so the rest of the
/// pipeline can tolerate partial knowledge.
#[derive(Debug, Clone)]
pub struct MaterialStore {
    properties: HashMap<String, MaterialProperties>,
    extra_catalog: HashMap<LayerRole, Vec<String>>,
}

impl MaterialStore {
    /// Creates the store populated with the built-in material table.
    pub fn builtin() -> Self {
        let mut properties = HashMap::new();
        for (id, bandgap_ev, toxicity) in BUILTIN_MATERIALS {
            properties.insert(
                (*id).to_string(),
                MaterialProperties {
                    bandgap_ev: *bandgap_ev,
                    toxicity: *toxicity,
                },
            );
        }
        Self {
            properties,
            extra_catalog: HashMap::new(),
        }
    }

    /// Creates the store from the built-in table plus user-supplied records.
    /// Records with a known identifier replace the built-in entry; records
    /// carrying a role also register the material in that role's catalog,
    /// so overrides can introduce entirely new materials.
    pub fn with_overrides(records: &[MaterialRecord]) -> Self {
        let mut store = Self::builtin();
        for record in records {
            store.properties.insert(
                record.material_id.clone(),
                MaterialProperties {
                    bandgap_ev: record.bandgap_ev,
                    toxicity: record.toxicity,
                },
            );
            if let Some(role) = record.role {
                store
                    .extra_catalog
                    .entry(role)
                    .or_default()
                    .push(record.material_id.clone());
            }
        }
        store
    }

    pub fn lookup(&self, material_id: &str) -> MaterialProperties {
        self.properties
            .get(material_id)
            .cloned()
            .unwrap_or_else(MaterialProperties::unknown)
    }

    /// The materials the built-in catalog allows for a given role.
    pub fn builtin_materials(role: LayerRole) -> &'static [&'static str] {
        match role {
            LayerRole::Tco => &["ITO", "FTO", "AZO"],
            LayerRole::Etl => &["TiO2", "SnO2", "ZnO"],
            LayerRole::Absorber => &["Si", "Perovskite", "CIGS", "CdTe"],
            LayerRole::Htl => &["Spiro-OMeTAD", "NiO", "CuSCN"],
            LayerRole::BackContact => &["Al", "Ag", "Au", "Mo"],
            LayerRole::Encapsulation => &["Glass-Polymer", "Polymeric Coating"],
        }
    }

    /// Whether this store's catalog (built-in table plus override-registered
    /// materials) accepts the material for the role.
    pub fn is_allowed(&self, role: LayerRole, material_id: &str) -> bool {
        Self::builtin_materials(role).contains(&material_id)
            || self
                .extra_catalog
                .get(&role)
                .is_some_and(|ids| ids.iter().any(|id| id == material_id))
    }
}

impl Default for MaterialStore {
    fn default() -> Self {
        Self::builtin()
    }
}

// Bandgaps in eV. Metals and encapsulants carry no meaningful bandgap.
const BUILTIN_MATERIALS: &[(&str, Option<f64>, Toxicity)] = &[
    ("ITO", Some(3.7), Toxicity::Low),
    ("FTO", Some(3.6), Toxicity::Low),
    ("AZO", Some(3.3), Toxicity::Low),
    ("TiO2", Some(3.2), Toxicity::Low),
    ("SnO2", Some(3.6), Toxicity::Low),
    ("ZnO", Some(3.37), Toxicity::Low),
    ("Si", Some(1.12), Toxicity::Low),
    ("Perovskite", Some(1.55), Toxicity::High),
    ("CIGS", Some(1.15), Toxicity::Medium),
    ("CdTe", Some(1.45), Toxicity::High),
    ("Spiro-OMeTAD", Some(3.0), Toxicity::Low),
    ("NiO", Some(3.6), Toxicity::Medium),
    ("CuSCN", Some(3.6), Toxicity::Low),
    ("Al", None, Toxicity::Low),
    ("Ag", None, Toxicity::Low),
    ("Au", None, Toxicity::Low),
    ("Mo", None, Toxicity::Low),
    ("Glass-Polymer", None, Toxicity::Low),
    ("Polymeric Coating", None, Toxicity::Low),
];
