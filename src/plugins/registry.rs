//! Plugin registry
//!
//! Holds validated descriptors in declaration order. Order is part of the
//! contract: token contributions apply in registry order, so later plugins
//! override earlier ones at collisions.

use super::descriptor::PluginDescriptor;
use super::validator::PluginValidator;
use super::{PluginError, PluginResult};

/// Ordered collection of validated plugin descriptors
#[derive(Debug, Default, Clone)]
pub struct PluginRegistry {
    descriptors: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Build a registry from declared descriptors, validating each one and
    /// rejecting duplicate names
    pub fn from_descriptors(descriptors: &[PluginDescriptor]) -> PluginResult<Self> {
        PluginValidator::validate_all(descriptors)?;
        Ok(Self {
            descriptors: descriptors.to_vec(),
        })
    }

    /// Register one descriptor at the end of the order
    pub fn register(&mut self, descriptor: PluginDescriptor) -> PluginResult<()> {
        PluginValidator::validate(&descriptor)?;
        if self.contains(&descriptor.name) {
            return Err(PluginError::DuplicateName(descriptor.name));
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Get a descriptor by name
    pub fn get(&self, name: &str) -> Option<&PluginDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// All descriptors in declaration order
    pub fn all(&self) -> &[PluginDescriptor] {
        &self.descriptors
    }

    /// Enabled descriptors in declaration order
    pub fn enabled(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.descriptors.iter().filter(|d| d.enabled)
    }

    /// Descriptor names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.name.as_str()).collect()
    }

    /// Check if a plugin is registered
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.iter().any(|d| d.name == name)
    }

    /// Get the number of registered plugins
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_keeps_declaration_order() {
        let mut registry = PluginRegistry::new();
        registry
            .register(PluginDescriptor::named("typography"))
            .expect("should register");
        registry
            .register(PluginDescriptor::named("forms"))
            .expect("should register");

        assert_eq!(registry.names(), vec!["typography", "forms"]);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = PluginRegistry::new();
        registry
            .register(PluginDescriptor::named("typography"))
            .expect("should register");

        let err = registry
            .register(PluginDescriptor::named("typography"))
            .expect_err("should fail");
        assert!(matches!(err, PluginError::DuplicateName(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_descriptor() {
        let registry = PluginRegistry::from_descriptors(&[PluginDescriptor::named("typography")])
            .expect("should build");

        assert!(registry.get("typography").is_some());
        assert!(registry.get("missing").is_none());
        assert!(registry.contains("typography"));
    }

    #[test]
    fn test_from_descriptors_validates() {
        let err = PluginRegistry::from_descriptors(&[
            PluginDescriptor::named("typography"),
            PluginDescriptor::named("typography"),
        ])
        .expect_err("should fail");
        assert!(matches!(err, PluginError::DuplicateName(_)));
    }

    #[test]
    fn test_enabled_filters_but_keeps_order() {
        let mut disabled = PluginDescriptor::named("legacy-grid");
        disabled.enabled = false;
        let registry = PluginRegistry::from_descriptors(&[
            PluginDescriptor::named("typography"),
            disabled,
            PluginDescriptor::named("forms"),
        ])
        .expect("should build");

        let enabled: Vec<&str> = registry.enabled().map(|d| d.name.as_str()).collect();
        assert_eq!(enabled, vec!["typography", "forms"]);
    }
}
