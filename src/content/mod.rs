//! Content pattern declarations and pure path matching.
//!
//! The `content` list names the template files whose class usage the
//! downstream scan phase reads. Walking the file system belongs to that
//! phase; this module only compiles the declared globs and answers whether
//! a given relative path is covered. Matching is a union across patterns,
//! so declaration order never changes the result; the order is still kept
//! for display and diagnostics.

use std::path::Path;

use glob::{MatchOptions, Pattern, PatternError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content pattern may not be empty")]
    EmptyPattern,

    #[error("invalid content pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

/// Compiled form of the `content` pattern list.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    patterns: Vec<CompiledPattern>,
    options: MatchOptions,
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    declared: String,
    compiled: Pattern,
}

impl ContentMatcher {
    /// Compiles every declared pattern.
    ///
    /// A leading `./` is dropped before compilation, so `./templates/**`
    /// and `templates/**` are equivalent. Empty or malformed patterns fail
    /// the whole compilation.
    pub fn compile(patterns: &[String]) -> Result<Self, ContentError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for declared in patterns {
            if declared.trim().is_empty() {
                return Err(ContentError::EmptyPattern);
            }
            let pattern = Pattern::new(normalize(declared)).map_err(|source| {
                ContentError::InvalidPattern {
                    pattern: declared.clone(),
                    source,
                }
            })?;
            compiled.push(CompiledPattern {
                declared: declared.clone(),
                compiled: pattern,
            });
        }
        Ok(Self {
            patterns: compiled,
            // `*` stays within one path component; `**` crosses directories.
            options: MatchOptions {
                case_sensitive: true,
                require_literal_separator: true,
                require_literal_leading_dot: false,
            },
        })
    }

    /// True when any declared pattern covers `path`.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        let candidate = normalize_path(path.as_ref());
        self.patterns
            .iter()
            .any(|pattern| pattern.compiled.matches_path_with(candidate, self.options))
    }

    /// Declared patterns that cover `path`, in declaration order.
    pub fn matching_patterns(&self, path: impl AsRef<Path>) -> Vec<&str> {
        let candidate = normalize_path(path.as_ref());
        self.patterns
            .iter()
            .filter(|pattern| pattern.compiled.matches_path_with(candidate, self.options))
            .map(|pattern| pattern.declared.as_str())
            .collect()
    }

    /// Declared patterns in their original order and spelling.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|pattern| pattern.declared.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn normalize(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

fn normalize_path(path: &Path) -> &Path {
    path.strip_prefix("./").unwrap_or(path)
}
