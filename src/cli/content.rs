//! Content CLI commands
//!
//! Commands for checking project paths against the configured content
//! patterns.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::ConfigLoader;
use crate::content::ContentMatcher;

/// Content subcommands
#[derive(Subcommand, Debug)]
pub enum ContentSubcommand {
    /// Check which content patterns match the given paths
    Check {
        /// Project-relative paths to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

/// Handle content subcommands
pub fn handle_content_command(
    cmd: ContentSubcommand,
    project_dir: &Path,
    explicit: Option<&Path>,
) -> Result<()> {
    tracing::debug!("Handling content command: {:?}", cmd);

    match cmd {
        ContentSubcommand::Check { paths } => {
            let config = ConfigLoader::load(project_dir, explicit)
                .context("Failed to load configuration")?;

            if config.content.is_empty() {
                return Err(anyhow::anyhow!(
                    "No content patterns configured (set 'content' in the project config)"
                ));
            }

            let matcher =
                ContentMatcher::compile(&config.content).context("Invalid content pattern")?;

            let mut unmatched = 0usize;
            for path in &paths {
                let matching = matcher.matching_patterns(path);
                if matching.is_empty() {
                    println!("✗ {} (no pattern matches)", path.display());
                    unmatched += 1;
                } else {
                    println!("✓ {} ({})", path.display(), matching.join(", "));
                }
            }

            if unmatched > 0 {
                eprintln!(
                    "{} of {} paths match no content pattern",
                    unmatched,
                    paths.len()
                );
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
