//! Built-in token defaults.
//!
//! Every resolution starts from this table; user configuration only ever
//! extends or replaces parts of it. The table ships inside the binary so a
//! project with no configuration at all still resolves to a usable theme.

use std::sync::OnceLock;

use crate::theme::tokens::{TokenTable, TokenValue};

const BASE_THEME_JSON: &str = include_str!("base_theme.json");

static BASE_THEME: OnceLock<TokenTable> = OnceLock::new();

/// Returns the built-in token table, parsed from the embedded asset on
/// first use.
pub fn base_theme() -> &'static TokenTable {
    BASE_THEME.get_or_init(|| {
        serde_json::from_str(BASE_THEME_JSON).expect("embedded base theme should be valid JSON")
    })
}

/// Category names present in the built-in table, in deterministic order.
pub fn base_categories() -> Vec<&'static str> {
    base_theme().keys().map(String::as_str).collect()
}

/// True when the built-in table defines `category` as a group.
pub fn is_base_category(category: &str) -> bool {
    base_theme().get(category).is_some_and(TokenValue::is_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tokens::get_path;

    #[test]
    fn base_theme_parses_and_caches() {
        let first = base_theme();
        let second = base_theme();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn base_theme_has_the_expected_categories() {
        assert_eq!(
            base_categories(),
            vec!["borderRadius", "boxShadow", "colors", "fontFamily", "spacing"]
        );
        assert!(is_base_category("colors"));
        assert!(!is_base_category("animation"));
    }

    #[test]
    fn base_palette_spot_checks() {
        assert_eq!(
            get_path(base_theme(), "colors.gray.900").and_then(TokenValue::as_str),
            Some("#111827")
        );
        assert_eq!(
            get_path(base_theme(), "colors.blue.500").and_then(TokenValue::as_str),
            Some("#3b82f6")
        );
        assert_eq!(
            get_path(base_theme(), "boxShadow.none").and_then(TokenValue::as_str),
            Some("none")
        );
        assert_eq!(
            get_path(base_theme(), "spacing.4").and_then(TokenValue::as_str),
            Some("1rem")
        );
    }

    #[test]
    fn base_colors_are_all_parseable() {
        let colors = base_theme()
            .get("colors")
            .and_then(TokenValue::as_group)
            .expect("base table should have a colors category");
        for (path, value) in crate::theme::tokens::leaves(colors) {
            assert!(
                crate::theme::color::parse_color(value).is_ok(),
                "base color {path} should parse: {value}"
            );
        }
    }

    #[test]
    fn base_shadows_are_all_parseable() {
        let shadows = base_theme()
            .get("boxShadow")
            .and_then(TokenValue::as_group)
            .expect("base table should have a boxShadow category");
        for (path, value) in crate::theme::tokens::leaves(shadows) {
            assert!(
                value.parse::<crate::theme::shadow::BoxShadow>().is_ok(),
                "base shadow {path} should parse: {value}"
            );
        }
    }
}
