//! Plugin descriptor validation
//!
//! Runs during the explicit configuration validation pass, never during
//! loading. Checks are declarative only; nothing here resolves or executes
//! a plugin.

use super::descriptor::PluginDescriptor;
use super::{PluginError, PluginResult};
use std::collections::HashSet;

/// Plugin descriptor validator
pub struct PluginValidator;

impl PluginValidator {
    /// Validate a whole descriptor list, including name uniqueness
    pub fn validate_all(descriptors: &[PluginDescriptor]) -> PluginResult<()> {
        let mut seen = HashSet::new();
        for descriptor in descriptors {
            Self::validate(descriptor)?;
            if !seen.insert(descriptor.name.as_str()) {
                return Err(PluginError::DuplicateName(descriptor.name.clone()));
            }
        }
        Ok(())
    }

    /// Validate one descriptor
    pub fn validate(descriptor: &PluginDescriptor) -> PluginResult<()> {
        Self::validate_name(&descriptor.name)?;
        Self::validate_source(descriptor)?;
        Ok(())
    }

    /// Validate plugin name
    fn validate_name(name: &str) -> PluginResult<()> {
        if name.is_empty() {
            return Err(PluginError::ValidationError(
                "Plugin name cannot be empty".to_string(),
            ));
        }

        // Name should be alphanumeric with hyphens/underscores
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(PluginError::ValidationError(format!(
                "Plugin name '{}' contains invalid characters. Use only alphanumeric, hyphens, and underscores",
                name
            )));
        }

        Ok(())
    }

    /// Validate the source reference when present
    fn validate_source(descriptor: &PluginDescriptor) -> PluginResult<()> {
        if let Some(source) = &descriptor.source {
            if source.trim().is_empty() {
                return Err(PluginError::ValidationError(format!(
                    "Plugin '{}' declares an empty source",
                    descriptor.name
                )));
            }
        }
        Ok(())
    }
}
