//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod content;
mod logging;
mod theme;
mod version;

pub use commands::{ConfigSubcommand, handle_config_command};
pub use content::{ContentSubcommand, handle_content_command};
pub use logging::*;
pub use theme::{OutputFormat, ThemeSubcommand, handle_theme_command};
pub use version::display_version;
