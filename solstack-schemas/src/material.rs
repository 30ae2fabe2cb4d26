use crate::layer::LayerRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toxicity {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Toxicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Toxicity::Low => "Low",
            Toxicity::Medium => "Medium",
            Toxicity::High => "High",
            Toxicity::Unknown => "Unknown",
        }
    }
}

/// Physical properties of one material, as resolved from the property store.
///
/// Unknown materials are represented by the sentinel record returned from
/// [`MaterialProperties::unknown`]: no bandgap and `Toxicity::Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandgap_ev: Option<f64>,
    pub toxicity: Toxicity,
}

impl MaterialProperties {
    pub fn unknown() -> Self {
        Self {
            bandgap_ev: None,
            toxicity: Toxicity::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub material_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandgap_ev: Option<f64>,
    #[serde(default)]
    pub toxicity: Toxicity,
    /// Registers the material in the catalog for this role, so override
    /// files can introduce materials beyond the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<LayerRole>,
}
