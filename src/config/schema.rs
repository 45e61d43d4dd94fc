//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for
//! serialization. The schema is deliberately open on the theme side: token
//! categories are free-form string trees, and categories this crate does
//! not interpret flow through loading and merging untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::plugins::descriptor::PluginDescriptor;
use crate::theme::tokens::TokenTable;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for the template files the scan phase may read.
    /// Declaration order is preserved; matching is a union, so zero
    /// matching files is not an error
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,

    /// Named partial configurations folded beneath this one at load time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<String>,

    /// Token declarations
    #[serde(default, skip_serializing_if = "ThemeSection::is_empty")]
    pub theme: ThemeSection,

    /// Ordered plugin descriptors. An empty list declares no extensions
    /// and resolves identically to omitting the key
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginDescriptor>,
}

/// The `theme` block: category replacements and extensions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSection {
    /// Categories deep-merged into the base table, collisions resolving in
    /// favor of the value declared here
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extend: TokenTable,

    /// Any other key under `theme` replaces that category of the base
    /// table wholesale
    #[serde(flatten)]
    pub replace: TokenTable,
}

impl ThemeSection {
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.replace.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.content.is_empty());
        assert!(config.presets.is_empty());
        assert!(config.theme.is_empty());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
content:
  - "./templates/**/*.html"
theme:
  extend:
    colors:
      neon:
        blue: "#3b82f6"
plugins: []
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content, vec!["./templates/**/*.html"]);
        assert!(config.plugins.is_empty());

        let blue = crate::theme::tokens::get_path(&config.theme.extend, "colors.neon.blue");
        assert_eq!(
            blue.and_then(crate::theme::TokenValue::as_str),
            Some("#3b82f6")
        );
    }

    #[test]
    fn test_replace_captures_non_extend_theme_keys() {
        let yaml = r#"
theme:
  extend:
    colors:
      ink: "#111827"
  fontFamily:
    sans: "Inter, sans-serif"
  screens:
    desktop: "1280px"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.theme.extend.len(), 1);
        assert_eq!(config.theme.replace.len(), 2);
        assert!(config.theme.replace.contains_key("fontFamily"));
        assert!(config.theme.replace.contains_key("screens"));
    }

    #[test]
    fn test_unknown_categories_survive_a_round_trip() {
        let yaml = "theme:\n  extend:\n    typographyScale:\n      prose: \"65ch\"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let rendered = serde_yaml::to_string(&config).unwrap();
        let reparsed: Config = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_empty_plugins_serializes_like_omitted() {
        let with_empty: Config = serde_yaml::from_str("plugins: []").unwrap();
        let omitted = Config::default();
        assert_eq!(with_empty, omitted);
        assert_eq!(
            serde_yaml::to_string(&with_empty).unwrap(),
            serde_yaml::to_string(&omitted).unwrap()
        );
    }

    #[test]
    fn test_json_configs_parse_too() {
        let json = r#"{
  "content": ["./templates/**/*.html"],
  "theme": { "extend": { "colors": { "base": { "bg": "#f7f8fb" } } } },
  "plugins": []
}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.content.len(), 1);
        assert!(!config.theme.extend.is_empty());
    }
}
