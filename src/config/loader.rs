//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{
    defaults, paths,
    presets::PresetLoader,
    schema::{Config, ThemeSection},
};
use crate::content::ContentMatcher;
use crate::plugins::PluginValidator;
use crate::theme;
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Project config (explicit path or discovered in `project_dir`)
    /// 3. User-global config
    /// 4. Built-in defaults
    ///
    /// After the layers merge, any presets named by the result are loaded
    /// and folded beneath it, so project tokens still win over preset
    /// tokens.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
        let mut config = Self::load_defaults();

        // Load user-global config
        let user_path = paths::user_config_path();
        if user_path.exists() {
            let user_config = Self::load_file(&user_path)?;
            config = Self::merge_config(config, user_config);
        }

        // Load project config. An explicit path must exist; discovery is
        // allowed to come up empty.
        if let Some(path) = explicit {
            let project_config = Self::load_file(path)?;
            config = Self::merge_config(config, project_config);
        } else if let Some(path) = paths::discover_project_file(project_dir) {
            let project_config = Self::load_file(&path)?;
            config = Self::merge_config(config, project_config);
        }

        // Apply environment variable overrides
        config = Self::apply_env_overrides(config);

        Self::expand_presets(config)
    }

    /// Load configuration from a file
    ///
    /// The format follows the file extension: `.json` parses as JSON,
    /// anything else as YAML.
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        tracing::debug!("Loading config from: {}", path.display());

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Config> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            serde_yaml::from_str(contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        }
    }

    /// Validate configuration by loading and checking for errors
    ///
    /// This performs strict validation - it will fail on:
    /// - Invalid YAML or JSON syntax
    /// - Content patterns that do not compile
    /// - Plugin descriptors with bad names or duplicate names
    /// - Color or shadow tokens that do not parse
    pub fn validate(project_dir: &Path, explicit: Option<&Path>) -> Result<()> {
        let config = Self::load(project_dir, explicit)
            .context("Failed to load merged configuration")?;

        Self::validate_config(&config)
    }

    /// Run the strict checks against an already loaded configuration
    pub fn validate_config(config: &Config) -> Result<()> {
        ContentMatcher::compile(&config.content).context("Invalid content pattern")?;

        PluginValidator::validate_all(&config.plugins).context("Invalid plugin configuration")?;

        theme::validate_table(&config.theme.extend).context("Invalid theme extension")?;
        theme::validate_table(&config.theme.replace)
            .context("Invalid theme category replacement")?;

        for plugin in &config.plugins {
            if let Some(table) = &plugin.theme {
                theme::validate_table(table).with_context(|| {
                    format!("Invalid theme contribution from plugin '{}'", plugin.name)
                })?;
            }
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Merge two configurations, with `other` taking precedence
    ///
    /// List fields (content, presets, plugins) replace wholesale when the
    /// overlay declares them. Theme tokens deep-merge, with the overlay
    /// winning on conflicting leaves.
    fn merge_config(base: Config, other: Config) -> Config {
        Config {
            content: if other.content.is_empty() {
                base.content
            } else {
                other.content
            },
            presets: if other.presets.is_empty() {
                base.presets
            } else {
                other.presets
            },
            theme: Self::merge_theme(base.theme, other.theme),
            plugins: if other.plugins.is_empty() {
                base.plugins
            } else {
                other.plugins
            },
        }
    }

    fn merge_theme(base: ThemeSection, other: ThemeSection) -> ThemeSection {
        let mut extend = base.extend;
        theme::deep_merge(&mut extend, &other.extend);

        let mut replace = base.replace;
        for (category, table) in other.replace {
            replace.insert(category, table);
        }

        ThemeSection { extend, replace }
    }

    /// Load the presets named by a configuration and fold them beneath it
    fn expand_presets(config: Config) -> Result<Config> {
        if config.presets.is_empty() {
            return Ok(config);
        }

        let mut layered = Self::load_defaults();
        for name in &config.presets {
            tracing::debug!("Expanding preset '{}'", name);
            let mut preset = PresetLoader::load(name)
                .with_context(|| format!("Failed to load preset '{}'", name))?;
            // Presets expand one level. A preset naming further presets
            // does not recurse.
            preset.presets = Vec::new();
            layered = Self::merge_config(layered, preset);
        }

        Ok(Self::merge_config(layered, config))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // WEFTCSS_PRESET override
        if let Ok(preset) = std::env::var("WEFTCSS_PRESET") {
            let preset = preset.trim();
            if !preset.is_empty() {
                tracing::debug!("Overriding presets from WEFTCSS_PRESET: {}", preset);
                config.presets = vec![preset.to_string()];
            }
        }

        // WEFTCSS_CONTENT override (comma-separated patterns)
        if let Ok(content) = std::env::var("WEFTCSS_CONTENT") {
            let patterns: Vec<String> = content
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            if !patterns.is_empty() {
                tracing::debug!("Overriding content patterns from WEFTCSS_CONTENT");
                config.content = patterns;
            }
        }

        // WEFTCSS_DISABLE_PLUGINS override
        if let Ok(disable) = std::env::var("WEFTCSS_DISABLE_PLUGINS") {
            if disable == "1" || disable.eq_ignore_ascii_case("true") {
                tracing::debug!("Disabling all plugins from WEFTCSS_DISABLE_PLUGINS");
                for plugin in &mut config.plugins {
                    plugin.enabled = false;
                }
            }
        }

        config
    }

    /// Save configuration to a file
    ///
    /// The format follows the file extension, matching `load_file`.
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let serialized = if is_json {
            let mut out = serde_json::to_string_pretty(config)
                .context("Failed to serialize configuration to JSON")?;
            out.push('\n');
            out
        } else {
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?
        };

        std::fs::write(path, serialized)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!("Saved configuration to: {}", path.display());

        Ok(())
    }
}
