//! Plugin descriptor schema.
//!
//! A descriptor names one plugin the downstream pipeline should apply,
//! optionally with a source reference, an options table passed through
//! verbatim, and a token contribution merged during theme resolution. A
//! bare string in the `plugins` sequence is shorthand for a descriptor
//! with only the name set:
//!
//! ```yaml
//! plugins:
//!   - typography
//!   - name: forms
//!     options:
//!       strategy: class
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::theme::tokens::TokenTable;

/// One entry in the `plugins` list. Declaration order is meaningful: token
/// contributions apply in list order, later entries winning at collisions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "DescriptorRepr")]
pub struct PluginDescriptor {
    pub name: String,
    pub enabled: bool,
    pub description: Option<String>,
    /// Opaque reference resolved by the downstream pipeline, e.g. a module
    /// path or package name.
    pub source: Option<String>,
    /// Tokens this plugin contributes to theme resolution.
    pub theme: Option<TokenTable>,
    /// Free-form options passed through to the plugin unchanged.
    pub options: BTreeMap<String, serde_yaml::Value>,
}

impl PluginDescriptor {
    /// Descriptor with only a name, as produced by the string shorthand.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            description: None,
            source: None,
            theme: None,
            options: BTreeMap::new(),
        }
    }

    /// True when the descriptor carries nothing beyond its name, so it can
    /// serialize back to the string shorthand.
    pub fn is_shorthand(&self) -> bool {
        self.enabled
            && self.description.is_none()
            && self.source.is_none()
            && self.theme.is_none()
            && self.options.is_empty()
    }

    pub fn has_theme(&self) -> bool {
        self.theme.is_some()
    }
}

impl fmt::Display for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.enabled {
            write!(f, " (disabled)")?;
        }
        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }
        Ok(())
    }
}

impl Serialize for PluginDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_shorthand() {
            serializer.serialize_str(&self.name)
        } else {
            DescriptorTable::from(self).serialize(serializer)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorRepr {
    Name(String),
    Full(DescriptorTable),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorTable {
    name: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<TokenTable>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    options: BTreeMap<String, serde_yaml::Value>,
}

fn default_enabled() -> bool {
    true
}

impl From<DescriptorRepr> for PluginDescriptor {
    fn from(repr: DescriptorRepr) -> Self {
        match repr {
            DescriptorRepr::Name(name) => PluginDescriptor::named(name),
            DescriptorRepr::Full(table) => PluginDescriptor {
                name: table.name,
                enabled: table.enabled,
                description: table.description,
                source: table.source,
                theme: table.theme,
                options: table.options,
            },
        }
    }
}

impl From<&PluginDescriptor> for DescriptorTable {
    fn from(descriptor: &PluginDescriptor) -> Self {
        DescriptorTable {
            name: descriptor.name.clone(),
            enabled: descriptor.enabled,
            description: descriptor.description.clone(),
            source: descriptor.source.clone(),
            theme: descriptor.theme.clone(),
            options: descriptor.options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_shorthand_parses_to_a_named_descriptor() {
        let descriptors: Vec<PluginDescriptor> =
            serde_yaml::from_str("- typography\n- forms\n").expect("should parse");

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0], PluginDescriptor::named("typography"));
        assert!(descriptors[1].enabled);
    }

    #[test]
    fn full_table_parses_with_defaults() {
        let yaml = "- name: forms\n  description: Form element resets\n";
        let descriptors: Vec<PluginDescriptor> = serde_yaml::from_str(yaml).expect("should parse");

        let descriptor = &descriptors[0];
        assert_eq!(descriptor.name, "forms");
        assert!(descriptor.enabled, "enabled should default to true");
        assert_eq!(descriptor.description.as_deref(), Some("Form element resets"));
        assert!(descriptor.theme.is_none());
    }

    #[test]
    fn disabled_descriptor_round_trips() {
        let yaml = "name: legacy-grid\nenabled: false\n";
        let descriptor: PluginDescriptor = serde_yaml::from_str(yaml).expect("should parse");
        assert!(!descriptor.enabled);

        let rendered = serde_yaml::to_string(&descriptor).expect("should serialize");
        let reparsed: PluginDescriptor = serde_yaml::from_str(&rendered).expect("should reparse");
        assert_eq!(descriptor, reparsed);
    }

    #[test]
    fn shorthand_serializes_back_to_a_string() {
        let rendered =
            serde_yaml::to_string(&vec![PluginDescriptor::named("typography")]).expect("should serialize");
        assert_eq!(rendered.trim(), "- typography");
    }

    #[test]
    fn theme_contribution_parses_as_a_token_table() {
        let yaml = "name: brandkit\ntheme:\n  colors:\n    brand: \"#0ea5e9\"\n";
        let descriptor: PluginDescriptor = serde_yaml::from_str(yaml).expect("should parse");

        assert!(descriptor.has_theme());
        let theme = descriptor.theme.expect("theme should be present");
        let brand = crate::theme::tokens::get_path(&theme, "colors.brand");
        assert_eq!(brand.and_then(crate::theme::TokenValue::as_str), Some("#0ea5e9"));
    }

    #[test]
    fn options_pass_through_unchanged() {
        let yaml = "name: forms\noptions:\n  strategy: class\n  levels: 3\n";
        let descriptor: PluginDescriptor = serde_yaml::from_str(yaml).expect("should parse");

        assert_eq!(descriptor.options.len(), 2);
        assert_eq!(
            descriptor.options.get("strategy"),
            Some(&serde_yaml::Value::String("class".to_string()))
        );
    }

    #[test]
    fn display_marks_disabled_descriptors() {
        let mut descriptor = PluginDescriptor::named("legacy-grid");
        descriptor.enabled = false;
        assert_eq!(descriptor.to_string(), "legacy-grid (disabled)");
    }
}
