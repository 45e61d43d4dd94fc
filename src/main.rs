//! weftcss - design-token configuration and content manifest engine
//!
//! This binary loads layered project configuration, resolves design
//! tokens against the built-in base theme, and checks project paths
//! against the configured content patterns.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use weftcss::cli::{
    self, ConfigSubcommand, ContentSubcommand, ThemeSubcommand, display_version,
    handle_config_command, handle_content_command, handle_theme_command,
};

/// weftcss - design-token configuration and content manifest engine
#[derive(Parser, Debug)]
#[command(name = "weftcss")]
#[command(about = "Design-token configuration and content manifest engine", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Path to a project config file (skips discovery)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Resolved design tokens and presets
    Theme {
        #[command(subcommand)]
        subcommand: ThemeSubcommand,
    },
    /// Content pattern checks
    Content {
        #[command(subcommand)]
        subcommand: ContentSubcommand,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);
    if args.debug {
        tracing::debug!("Debug logging enabled");
    }

    let project_dir = std::env::current_dir().context("Failed to determine current directory")?;
    let explicit = args.config.as_deref();

    match args.command {
        Command::Config { subcommand } => {
            handle_config_command(subcommand, &project_dir, explicit)
        }
        Command::Theme { subcommand } => handle_theme_command(subcommand, &project_dir, explicit),
        Command::Content { subcommand } => {
            handle_content_command(subcommand, &project_dir, explicit)
        }
        Command::Version => {
            display_version();
            Ok(())
        }
    }
}
