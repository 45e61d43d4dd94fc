//! CSS color parsing for token validation and display.
//!
//! Anything `csscolorparser` understands is a valid color token: hex in
//! short or long form, `rgb()`/`rgba()` in legacy or slash syntax, `hsl()`,
//! and named colors. The canonical spelling used by the built-in palette is
//! lowercase `#rrggbb`.

use csscolorparser::Color;

use crate::theme::ThemeError;

/// True when `value` is exactly a `#` followed by six hex digits.
pub fn is_canonical_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses any supported CSS color.
pub fn parse_color(value: &str) -> Result<Color, ThemeError> {
    csscolorparser::parse(value).map_err(|source| ThemeError::InvalidColor {
        value: value.to_string(),
        reason: source.to_string(),
    })
}

/// Canonical hex spelling of a color: `#rrggbb`, or `#rrggbbaa` when the
/// color carries alpha.
pub fn canonical_hex(value: &str) -> Result<String, ThemeError> {
    Ok(parse_color(value)?.to_css_hex())
}
