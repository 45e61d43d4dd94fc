//! Preset loading and management
//!
//! A preset is a named partial configuration, usually theme tokens, folded
//! beneath the project configuration at load time. Presets resolve from the
//! user presets directory first, then the system presets directory, then
//! the set embedded in the binary.

use super::paths;
use super::schema::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// List of embedded preset names
pub const EMBEDDED_PRESETS: &[&str] = &["midnight", "paper"];

/// Get embedded preset YAML content by name
pub fn get_embedded_preset(name: &str) -> Option<&'static str> {
    match name {
        "midnight" => Some(include_str!("presets/midnight.yaml")),
        "paper" => Some(include_str!("presets/paper.yaml")),
        _ => None,
    }
}

/// Check if a preset name is an embedded preset
pub fn is_embedded_preset(name: &str) -> bool {
    EMBEDDED_PRESETS.contains(&name)
}

/// Get all embedded preset names
pub fn list_embedded_presets() -> Vec<String> {
    EMBEDDED_PRESETS.iter().map(|s| s.to_string()).collect()
}

/// Preset loader
pub struct PresetLoader;

impl PresetLoader {
    /// Load a preset by name
    ///
    /// Resolution order:
    /// 1. User presets directory ($XDG_DATA_HOME/weftcss/presets/{name}.yaml)
    /// 2. System presets directory ($XDG_CONFIG_HOME/weftcss/presets/{name}.yaml)
    /// 3. Presets embedded in the binary
    ///
    /// An unknown name is an error. A preset silently falling away would
    /// change resolved tokens with nothing to point at, so the load fails
    /// instead.
    pub fn load(name: &str) -> Result<Config> {
        let user_preset_path = paths::user_presets_dir().join(format!("{}.yaml", name));
        if user_preset_path.exists() {
            return Self::load_from_file(&user_preset_path);
        }

        let system_preset_path = paths::system_presets_dir().join(format!("{}.yaml", name));
        if system_preset_path.exists() {
            return Self::load_from_file(&system_preset_path);
        }

        if let Some(yaml_content) = get_embedded_preset(name) {
            tracing::debug!("Loading embedded preset '{}'", name);
            return serde_yaml::from_str(yaml_content)
                .with_context(|| format!("Failed to parse embedded preset '{}'", name));
        }

        anyhow::bail!(
            "Preset '{}' not found in user presets, system presets, or embedded presets",
            name
        )
    }

    /// Load a preset from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset file: {}", path.display()))?;

        tracing::debug!("Loading preset from: {}", path.display());

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse preset file: {}", path.display()))
    }

    /// Every preset name currently resolvable: embedded presets plus any
    /// YAML files in the user and system preset directories, sorted and
    /// deduplicated
    pub fn available() -> Vec<String> {
        let mut names: Vec<String> = list_embedded_presets();
        for dir in [paths::user_presets_dir(), paths::system_presets_dir()] {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                let is_yaml = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
                if !is_yaml {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }
}
