//! Theme CLI commands
//!
//! Commands for inspecting resolved design tokens and available presets.

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use std::path::Path;

use crate::config::{ConfigLoader, PresetLoader, presets};
use crate::theme::{ResolvedTheme, TokenValue};

/// Output format for resolved tokens
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeSubcommand {
    /// Print the fully resolved token table
    Resolve {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Look up a resolved token by dotted path
    Get {
        /// Token path (e.g., "colors.neon.blue")
        path: String,
    },
    /// List available presets
    Presets,
}

/// Handle theme subcommands
pub fn handle_theme_command(
    cmd: ThemeSubcommand,
    project_dir: &Path,
    explicit: Option<&Path>,
) -> Result<()> {
    tracing::debug!("Handling theme command: {:?}", cmd);

    match cmd {
        ThemeSubcommand::Resolve { format } => {
            let config = ConfigLoader::load(project_dir, explicit)
                .context("Failed to load configuration")?;
            let theme = ResolvedTheme::resolve(&config);

            match format {
                OutputFormat::Yaml => {
                    let yaml = serde_yaml::to_string(&theme)
                        .context("Failed to serialize resolved theme")?;
                    print!("{}", yaml);
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&theme)
                        .context("Failed to serialize resolved theme")?;
                    println!("{}", json);
                }
            }
        }
        ThemeSubcommand::Get { path } => {
            let config = ConfigLoader::load(project_dir, explicit)
                .context("Failed to load configuration")?;
            let theme = ResolvedTheme::resolve(&config);

            match theme.get(&path) {
                Some(TokenValue::Value(value)) => println!("{}", value),
                Some(TokenValue::Group(group)) => {
                    let yaml =
                        serde_yaml::to_string(group).context("Failed to serialize token group")?;
                    print!("{}", yaml);
                }
                None => {
                    return Err(anyhow::anyhow!("No token at {}", path));
                }
            }
        }
        ThemeSubcommand::Presets => {
            println!("Available presets:");
            for name in PresetLoader::available() {
                if presets::is_embedded_preset(&name) {
                    println!("  - {} (embedded)", name);
                } else {
                    println!("  - {}", name);
                }
            }
        }
    }

    Ok(())
}
