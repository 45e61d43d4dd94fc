//! Configuration system for weftcss
//!
//! This module provides the layered configuration system, supporting
//! user-global and project files, preset expansion, environment overrides,
//! and persistent settings.

pub mod defaults;
pub mod loader;
pub mod paths;
pub mod presets;
pub mod schema;

pub use loader::ConfigLoader;
pub use presets::PresetLoader;
pub use schema::Config;
pub use schema::ThemeSection;

use crate::plugins::PluginDescriptor;
use crate::theme::{self, TokenValue};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "content" => to_yaml(&config.content, key),
        "presets" => to_yaml(&config.presets, key),
        "plugins" => to_yaml(&config.plugins, key),
        "theme" => to_yaml(&config.theme, key),
        "theme.extend" => to_yaml(&config.theme.extend, key),
        _ => {
            if let Some(path) = key.strip_prefix("theme.extend.") {
                match theme::get_path(&config.theme.extend, path) {
                    Some(TokenValue::Value(value)) => Ok(value.clone()),
                    Some(TokenValue::Group(group)) => to_yaml(group, key),
                    None => Err(anyhow::anyhow!("No token at theme.extend.{}", path)),
                }
            } else {
                Err(anyhow::anyhow!("Unknown configuration key: {}", key))
            }
        }
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "content" => {
            config.content = parse_string_list(value).context(
                "content must be a YAML array (e.g., ['./templates/**/*.html']) or comma-separated list",
            )?;
        }
        "presets" => {
            config.presets = parse_string_list(value)
                .context("presets must be a YAML array (e.g., ['midnight']) or comma-separated list")?;
        }
        "plugins" => {
            // Parse as YAML array or comma-separated list of plugin names
            config.plugins = if value.trim_start().starts_with('[') {
                serde_yaml::from_str(value).context(
                    "plugins must be a YAML array (e.g., ['typography', 'forms']) or comma-separated list",
                )?
            } else {
                value
                    .split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(PluginDescriptor::named)
                    .collect()
            };
        }
        "theme.extend" => {
            config.theme.extend = serde_yaml::from_str(value)
                .context("theme.extend must be a YAML mapping of token categories")?;
        }
        _ => {
            if let Some(path) = key.strip_prefix("theme.extend.") {
                if path.is_empty() {
                    return Err(anyhow::anyhow!("Unknown configuration key: {}", key));
                }
                // Token values like "#3b82f6" read as comments to a YAML
                // parser, so only flow mappings go through serde; anything
                // else stores verbatim.
                let token = if value.trim_start().starts_with('{') {
                    serde_yaml::from_str(value)
                        .with_context(|| format!("{} must be a YAML mapping of tokens", key))?
                } else {
                    TokenValue::Value(value.to_string())
                };
                theme::set_path(&mut config.theme.extend, path, token);
            } else {
                return Err(anyhow::anyhow!("Unknown configuration key: {}", key));
            }
        }
    }

    Ok(())
}

fn to_yaml<T: serde::Serialize>(value: &T, key: &str) -> anyhow::Result<String> {
    serde_yaml::to_string(value).map_err(|e| anyhow::anyhow!("Failed to serialize {}: {}", key, e))
}

fn parse_string_list(value: &str) -> anyhow::Result<Vec<String>> {
    if value.trim_start().starts_with('[') {
        Ok(serde_yaml::from_str(value)?)
    } else {
        Ok(value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}
