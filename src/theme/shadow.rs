//! Box-shadow token parsing.
//!
//! A shadow token is one string holding one or more comma-separated layers.
//! Commas inside color functions (`rgba(31,41,55,.08)`) do not split
//! layers, and spaces inside modern color syntax (`rgb(0 0 0 / 0.1)`) do
//! not split terms. Each layer carries two to four lengths (offset-x,
//! offset-y, optional blur, optional spread), an optional color, and an
//! optional `inset` keyword.

use std::fmt;
use std::str::FromStr;

use crate::theme::ThemeError;
use crate::theme::color;

/// One parsed layer of a shadow value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowLayer {
    pub inset: bool,
    pub offset_x: String,
    pub offset_y: String,
    pub blur: Option<String>,
    pub spread: Option<String>,
    pub color: Option<String>,
}

/// A full shadow token: its layers in declaration order.
///
/// `"none"` parses to an empty layer list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxShadow {
    pub layers: Vec<ShadowLayer>,
}

impl BoxShadow {
    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }
}

impl FromStr for BoxShadow {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(invalid(value, "empty value"));
        }
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(BoxShadow::default());
        }
        let mut layers = Vec::new();
        for raw_layer in split_layers(trimmed) {
            layers.push(ShadowLayer::parse(raw_layer).map_err(|reason| invalid(value, &reason))?);
        }
        Ok(BoxShadow { layers })
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return write!(f, "none");
        }
        let rendered: Vec<String> = self.layers.iter().map(ShadowLayer::to_string).collect();
        write!(f, "{}", rendered.join(", "))
    }
}

impl ShadowLayer {
    fn parse(raw: &str) -> Result<Self, String> {
        let mut inset = false;
        let mut lengths: Vec<String> = Vec::new();
        let mut color_term: Option<String> = None;

        for term in split_terms(raw) {
            if term.eq_ignore_ascii_case("inset") {
                if inset {
                    return Err("duplicate inset keyword".to_string());
                }
                inset = true;
            } else if is_length(&term) {
                if lengths.len() == 4 {
                    return Err(format!("too many length values in layer '{raw}'"));
                }
                lengths.push(term);
            } else if color_term.is_none() && color::parse_color(&term).is_ok() {
                color_term = Some(term);
            } else {
                return Err(format!("unrecognized term '{term}' in layer '{raw}'"));
            }
        }

        let mut lengths = lengths.into_iter();
        let (Some(offset_x), Some(offset_y)) = (lengths.next(), lengths.next()) else {
            return Err(format!("layer '{raw}' needs at least offset-x and offset-y"));
        };

        Ok(ShadowLayer {
            inset,
            offset_x,
            offset_y,
            blur: lengths.next(),
            spread: lengths.next(),
            color: color_term,
        })
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            write!(f, "inset ")?;
        }
        write!(f, "{} {}", self.offset_x, self.offset_y)?;
        if let Some(blur) = &self.blur {
            write!(f, " {blur}")?;
        }
        if let Some(spread) = &self.spread {
            write!(f, " {spread}")?;
        }
        if let Some(color) = &self.color {
            write!(f, " {color}")?;
        }
        Ok(())
    }
}

fn invalid(value: &str, reason: &str) -> ThemeError {
    ThemeError::InvalidShadow {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Splits on commas that sit outside parentheses.
fn split_layers(value: &str) -> Vec<&str> {
    let mut layers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                layers.push(value[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    layers.push(value[start..].trim());
    layers
}

/// Splits one layer on whitespace that sits outside parentheses, so a
/// color function stays a single term.
fn split_terms(layer: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for ch in layer.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    terms.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        terms.push(current);
    }
    terms
}

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "pt", "pc", "ch", "ex", "cm", "mm", "in",
];

/// A CSS length: a number with a known unit, or a bare `0`.
fn is_length(term: &str) -> bool {
    let number_end = term
        .char_indices()
        .find(|(idx, ch)| {
            !(ch.is_ascii_digit() || *ch == '.' || (*idx == 0 && (*ch == '-' || *ch == '+')))
        })
        .map(|(idx, _)| idx)
        .unwrap_or(term.len());
    if number_end == 0 {
        return false;
    }
    let (number, unit) = term.split_at(number_end);
    if number.parse::<f64>().is_err() {
        return false;
    }
    (unit.is_empty() && number == "0") || LENGTH_UNITS.contains(&unit.to_ascii_lowercase().as_str())
}
