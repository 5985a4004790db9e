use std::path::{Path, PathBuf};

use lodeforge_compile::{LoaderOptions, loader::VANILLA_FILE};
use lodeforge_core::{DEFAULT_NAMESPACE, DEFAULT_SUBSTRATE, MaterialCatalog};
use lodeforge_rules::ContextOptions;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Default name of the settings file.
pub const SETTINGS_FILE: &str = "lodeforge.toml";

/// Materials known to the command line catalog when the settings list none.
const BUILTIN_MATERIALS: &[&str] = &[
    "stone",
    "dirt",
    "gravel",
    "granite",
    "diorite",
    "andesite",
    "netherrack",
    "end_stone",
    "coal_ore",
    "iron_ore",
    "gold_ore",
    "redstone_ore",
    "lapis_ore",
    "diamond_ore",
    "emerald_ore",
    "quartz_ore",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world_gen_dir: PathBuf,
    pub vanilla_file: String,
    pub replace_vanilla: bool,
    pub default_namespace: String,
    pub default_material: String,
    /// Identifiers registered in the material catalog.
    pub materials: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_gen_dir: PathBuf::from("config/worldgen"),
            vanilla_file: VANILLA_FILE.to_string(),
            replace_vanilla: false,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            default_material: DEFAULT_SUBSTRATE.to_string(),
            materials: BUILTIN_MATERIALS.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            world_gen_dir: self.world_gen_dir.clone(),
            vanilla_file: self.vanilla_file.clone(),
            replace_vanilla: self.replace_vanilla,
        }
    }

    pub fn context_options(&self) -> ContextOptions {
        ContextOptions {
            default_namespace: self.default_namespace.clone(),
            default_material: self.default_material.clone(),
        }
    }

    pub fn catalog(&self) -> MaterialCatalog {
        MaterialCatalog::from_identifiers(&self.materials, &self.default_namespace)
    }
}

/// Read settings from `path`, falling back to defaults when it does not exist.
pub fn load_settings(path: &Path) -> Result<Settings, CliError> {
    if !path.exists() {
        tracing::debug!(event = "settings_defaulted", path = %path.display());
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    tracing::debug!(event = "settings_loaded", path = %path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            world_gen_dir = "mods/ores"
            replace_vanilla = true
            materials = ["stone", "thermal:copper_ore"]
            "#,
        )
        .expect("settings parse");

        assert_eq!(settings.world_gen_dir, PathBuf::from("mods/ores"));
        assert!(settings.replace_vanilla);
        assert_eq!(settings.vanilla_file, VANILLA_FILE);
        assert_eq!(settings.default_material, DEFAULT_SUBSTRATE);

        let catalog = settings.catalog();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join(format!("lodeforge_{}.toml", uuid::Uuid::new_v4()));
        let settings = load_settings(&path).expect("defaults");
        assert!(!settings.replace_vanilla);
        assert!(settings.materials.iter().any(|id| id == "stone"));
    }
}
