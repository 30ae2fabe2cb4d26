use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional role of a layer, in canonical front-to-back order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    Tco,
    Etl,
    Absorber,
    Htl,
    BackContact,
    Encapsulation,
}

impl LayerRole {
    /// All roles, front of the cell first.
    pub const ALL: [LayerRole; 6] = [
        LayerRole::Tco,
        LayerRole::Etl,
        LayerRole::Absorber,
        LayerRole::Htl,
        LayerRole::BackContact,
        LayerRole::Encapsulation,
    ];

    /// Position of this role in the canonical stack order.
    pub fn canonical_index(&self) -> usize {
        match self {
            LayerRole::Tco => 0,
            LayerRole::Etl => 1,
            LayerRole::Absorber => 2,
            LayerRole::Htl => 3,
            LayerRole::BackContact => 4,
            LayerRole::Encapsulation => 5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LayerRole::Tco => "TCO",
            LayerRole::Etl => "ETL",
            LayerRole::Absorber => "Absorber",
            LayerRole::Htl => "HTL",
            LayerRole::BackContact => "Back Contact",
            LayerRole::Encapsulation => "Encapsulation",
        }
    }
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One layer of a stack as requested by the user, before any validation or
/// property resolution has happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub role: LayerRole,
    pub material: String,
    pub thickness_nm: u32,
}
