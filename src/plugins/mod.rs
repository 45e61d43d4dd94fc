// Plugin descriptor handling for weftcss
//
// Descriptors are declarative references: this crate validates them, keeps
// their order, and merges any token contributions they declare. Resolving a
// source string to executable code and running it belongs to the downstream
// build pipeline.

pub mod descriptor;
pub mod registry;
pub mod validator;

pub use descriptor::PluginDescriptor;
pub use registry::PluginRegistry;
pub use validator::PluginValidator;

/// Plugin errors
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Duplicate plugin name: {0}")]
    DuplicateName(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type for plugin operations
pub type PluginResult<T> = Result<T, PluginError>;
