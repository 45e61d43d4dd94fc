//! Design-token model.
//!
//! `tokens` holds the open token-tree type and the deep merge, `base` the
//! built-in defaults, `resolver` the merge pipeline, and `color`/`shadow`
//! the value parsers for the two categories this crate interprets.

pub mod base;
pub mod color;
pub mod resolver;
pub mod shadow;
pub mod tokens;

use thiserror::Error;

pub use resolver::ResolvedTheme;
pub use shadow::{BoxShadow, ShadowLayer};
pub use tokens::{TokenTable, TokenValue, deep_merge, get_path, leaves, set_path};

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("invalid box shadow '{value}': {reason}")]
    InvalidShadow { value: String, reason: String },

    #[error("invalid token at '{path}': {reason}")]
    InvalidToken { path: String, reason: String },
}

pub type ThemeResult<T> = Result<T, ThemeError>;

/// Validates the token categories this crate understands.
///
/// `colors` leaves must parse as CSS colors and `boxShadow` leaves as
/// shadow values. Every other category passes through unchecked; the
/// schema stays open for categories downstream consumers interpret.
pub fn validate_table(table: &TokenTable) -> ThemeResult<()> {
    for (path, value) in category_leaves(table, "colors") {
        color::parse_color(value).map_err(|err| ThemeError::InvalidToken {
            path,
            reason: err.to_string(),
        })?;
    }
    for (path, value) in category_leaves(table, "boxShadow") {
        value.parse::<BoxShadow>().map_err(|err| ThemeError::InvalidToken {
            path,
            reason: err.to_string(),
        })?;
    }
    Ok(())
}

/// Leaves under one category, with paths rooted at the category name. A
/// category declared directly as a leaf yields a single pair.
fn category_leaves<'a>(table: &'a TokenTable, category: &str) -> Vec<(String, &'a str)> {
    match table.get(category) {
        Some(TokenValue::Group(group)) => tokens::leaves(group)
            .into_iter()
            .map(|(path, value)| (format!("{category}.{path}"), value))
            .collect(),
        Some(TokenValue::Value(value)) => vec![(category.to_string(), value.as_str())],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(yaml: &str) -> TokenTable {
        serde_yaml::from_str(yaml).expect("test table should parse")
    }

    #[test]
    fn accepts_well_formed_categories() {
        let tokens = table(
            "colors:\n  neon:\n    blue: \"#3b82f6\"\nboxShadow:\n  glass: \"0 10px 30px rgba(31,41,55,.08), inset 0 1px 0 rgba(255,255,255,.5)\"\n",
        );
        assert!(validate_table(&tokens).is_ok());
    }

    #[test]
    fn rejects_a_malformed_color_with_its_path() {
        let tokens = table("colors:\n  neon:\n    blue: \"not-a-color\"\n");
        let err = validate_table(&tokens).expect_err("should fail");
        assert!(err.to_string().contains("colors.neon.blue"), "got: {err}");
    }

    #[test]
    fn rejects_a_malformed_shadow_with_its_path() {
        let tokens = table("boxShadow:\n  broken: \"10px\"\n");
        let err = validate_table(&tokens).expect_err("should fail");
        assert!(err.to_string().contains("boxShadow.broken"), "got: {err}");
    }

    #[test]
    fn ignores_categories_it_does_not_interpret() {
        let tokens = table("animation:\n  spin: \"spin 1s linear infinite\"\n");
        assert!(validate_table(&tokens).is_ok());
    }

    #[test]
    fn a_category_declared_as_a_leaf_is_still_checked() {
        let tokens = table("colors: \"#ffffff\"\n");
        assert!(validate_table(&tokens).is_ok());

        let bad = table("colors: \"nope\"\n");
        assert!(validate_table(&bad).is_err());
    }
}
