//! weftcss configuration engine
//!
//! This library provides the configuration, design-token, and content
//! manifest layers of the weftcss toolchain. It can be used both by the
//! weftcss binary and as a library for downstream build tooling.

pub mod cli;
pub mod config;
pub mod content;
pub mod plugins;
pub mod theme;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigLoader, PresetLoader};
pub use content::ContentMatcher;
pub use theme::{ResolvedTheme, TokenTable, TokenValue};
