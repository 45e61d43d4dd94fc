//! Default configuration values
//!
//! Provides default configuration instances and the starter file written
//! by `weftcss config init`.

use super::schema::Config;

/// Get the default configuration
///
/// An empty configuration is fully usable: it declares nothing and
/// resolves to the built-in base token table.
pub fn default_config() -> Config {
    Config::default()
}

/// Starter project file written by `weftcss config init`, kept as literal
/// YAML so its comments survive.
pub const STARTER_CONFIG_YAML: &str = r#"# weftcss project configuration
#
# content: glob patterns for the templates the scan phase reads.
# theme.extend: tokens merged into the built-in defaults.
# plugins: ordered plugin descriptors; empty means no extensions.

content:
  - "./templates/**/*.html"

theme:
  extend: {}
    # colors:
    #   brand:
    #     primary: "#2563eb"

plugins: []
"#;
