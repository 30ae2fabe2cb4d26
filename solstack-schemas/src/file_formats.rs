use crate::{layer::LayerSpec, material::MaterialRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MaterialFile {
    pub schema_version: String,
    pub materials: Vec<MaterialRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StackFile {
    pub schema_version: String,
    pub layers: Vec<LayerSpec>,
}
