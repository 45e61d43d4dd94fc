//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::{self, ConfigLoader, defaults, paths};
use crate::plugins::PluginRegistry;

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "content", "theme.extend.colors.neon.blue")
        key: Option<String>,
    },
    /// Set configuration value in the project config file
    Set {
        /// Configuration key (e.g., "content", "theme.extend.colors.neon.blue")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List the effective merged configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
    /// Write a starter project config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Handle configuration subcommands
pub fn handle_config_command(
    cmd: ConfigSubcommand,
    project_dir: &Path,
    explicit: Option<&Path>,
) -> Result<()> {
    tracing::debug!("Handling config command: {:?}", cmd);

    match cmd {
        ConfigSubcommand::Get { key } => {
            // Load config (will use defaults if no file exists)
            let config = ConfigLoader::load(project_dir, explicit)
                .context("Failed to load configuration")?;

            if let Some(key) = key {
                // Get specific key
                let value = config::get_config_value(&config, &key)?;
                println!("{}", value.trim_end());
            } else {
                // Print all config as YAML
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Set edits the project file alone, never the merged result
            let target = project_file_target(project_dir, explicit);
            let mut config = if target.exists() {
                ConfigLoader::load_file(&target)?
            } else {
                ConfigLoader::load_defaults()
            };

            config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save(&config, &target).context("Failed to save configuration")?;
            println!("Configuration saved to {}", target.display());
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load(project_dir, explicit)
                .context("Failed to load configuration")?;

            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);

            if !config.plugins.is_empty() {
                let registry = PluginRegistry::from_descriptors(&config.plugins)
                    .context("Invalid plugin configuration")?;
                println!();
                println!(
                    "Plugins ({} enabled): {}",
                    registry.enabled().count(),
                    registry.names().join(", ")
                );
            }
        }
        ConfigSubcommand::Path => {
            let path = if let Some(path) = explicit {
                path.to_path_buf()
            } else if let Some(found) = paths::discover_project_file(project_dir) {
                found
            } else {
                paths::user_config_path()
            };
            println!("{}", path.display());
        }
        ConfigSubcommand::Validate => {
            match ConfigLoader::validate(project_dir, explicit) {
                Ok(()) => {
                    println!("Configuration is valid");
                }
                Err(e) => {
                    eprintln!("Configuration validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        ConfigSubcommand::Init { force } => {
            let target = project_dir.join(paths::PROJECT_FILE_NAMES[0]);
            if target.exists() && !force {
                return Err(anyhow::anyhow!(
                    "Config file already exists: {} (use --force to overwrite)",
                    target.display()
                ));
            }

            std::fs::write(&target, defaults::STARTER_CONFIG_YAML)
                .with_context(|| format!("Failed to write config file: {}", target.display()))?;
            println!("Created {}", target.display());
        }
    }

    Ok(())
}

/// The file `config set` should edit: the explicit path if one was given,
/// an existing project file if one is discoverable, and otherwise a fresh
/// weftcss.yaml in the project directory.
fn project_file_target(project_dir: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    paths::discover_project_file(project_dir)
        .unwrap_or_else(|| project_dir.join(paths::PROJECT_FILE_NAMES[0]))
}
