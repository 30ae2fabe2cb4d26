use anyhow::{Context, Result};
use solstack_core::materials::MaterialStore;
use solstack_schemas::{file_formats::MaterialFile, material::MaterialRecord};
use std::{fs, path::Path};

/// The material knowledge available to a run: the engine's built-in table,
/// optionally extended or overridden by user-supplied YAML files.
pub struct MaterialLibrary {
    pub store: MaterialStore,
}

impl MaterialLibrary {
    /// Builds the library, reading every YAML file in `overrides_dir` when
    /// one is given.
    pub fn load(overrides_dir: Option<&Path>) -> Result<Self> {
        let store = match overrides_dir {
            Some(dir) => {
                println!("Loading material overrides from '{}'...", dir.display());
                let records = load_material_records(dir)?;
                println!("Loaded {} material override(s).", records.len());
                MaterialStore::with_overrides(&records)
            }
            None => MaterialStore::builtin(),
        };
        Ok(Self { store })
    }
}

/// Collects the material records from all YAML files in a directory.
fn load_material_records(dir_path: &Path) -> Result<Vec<MaterialRecord>> {
    let mut records = Vec::new();
    for entry in fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            let content = fs::read_to_string(&path)?;
            let file: MaterialFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
            records.extend(file.materials);
        }
    }
    Ok(records)
}
