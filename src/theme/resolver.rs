//! Theme resolution.
//!
//! Folds the effective configuration over the built-in defaults into one
//! read-only table: enabled plugin contributions first (declaration order,
//! later wins at collisions), then category replacements, then the
//! `theme.extend` deep merge. Nothing here touches the file system; preset
//! expansion already happened during loading.

use serde::Serialize;
use tracing::debug;

use crate::config::schema::Config;
use crate::theme::base;
use crate::theme::tokens::{self, TokenTable, TokenValue, deep_merge};

/// The merged token table for one invocation.
///
/// Constructed once per build and read-only afterwards; a new invocation
/// re-resolves from the declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedTheme {
    tokens: TokenTable,
}

impl ResolvedTheme {
    /// Resolves `config` against the built-in base table.
    pub fn resolve(config: &Config) -> Self {
        Self::resolve_over(base::base_theme().clone(), config)
    }

    /// Resolves `config` over an explicit base table.
    pub fn resolve_over(base: TokenTable, config: &Config) -> Self {
        let mut table = base;

        for descriptor in config.plugins.iter().filter(|d| d.enabled) {
            if let Some(contribution) = &descriptor.theme {
                debug!(plugin = %descriptor.name, "merging plugin token contribution");
                deep_merge(&mut table, contribution);
            }
        }

        for (category, value) in &config.theme.replace {
            table.insert(category.clone(), value.clone());
        }

        deep_merge(&mut table, &config.theme.extend);

        debug!(categories = table.len(), "resolved theme");
        Self { tokens: table }
    }

    /// Dotted lookup into the resolved table, e.g. `colors.neon.blue`.
    pub fn get(&self, path: &str) -> Option<&TokenValue> {
        tokens::get_path(&self.tokens, path)
    }

    /// One category's table, when present and a group.
    pub fn category(&self, name: &str) -> Option<&TokenTable> {
        self.tokens.get(name).and_then(TokenValue::as_group)
    }

    /// Category names in deterministic order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }
}
