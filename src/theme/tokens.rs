//! Nested design-token tables and the deep-merge that combines them.
//!
//! Tokens live in string-keyed trees: the first level holds category names
//! (`colors`, `boxShadow`, ...), deeper levels hold groups and leaves. The
//! schema is open on purpose. Categories this crate has never heard of
//! travel through loading, merging, and serialization untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A token tree level, keyed by category, group, or token name.
///
/// `BTreeMap` keeps iteration deterministic, which in turn keeps rendered
/// output and snapshots stable across runs.
pub type TokenTable = BTreeMap<String, TokenValue>;

/// One entry in a token table: a leaf value or a nested group.
///
/// Leaves stay raw strings (`"#3b82f6"`, `"0 1px 2px 0 rgb(0 0 0 / 0.05)"`).
/// Interpretation happens later, in the validators and parsers that
/// understand specific categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A leaf token.
    Value(String),
    /// A nested group, such as the shades of one color.
    Group(TokenTable),
}

impl TokenValue {
    /// Returns the leaf string when this entry is a leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Value(value) => Some(value),
            TokenValue::Group(_) => None,
        }
    }

    /// Returns the nested table when this entry is a group.
    pub fn as_group(&self) -> Option<&TokenTable> {
        match self {
            TokenValue::Value(_) => None,
            TokenValue::Group(group) => Some(group),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, TokenValue::Group(_))
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Value(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Value(value)
    }
}

/// Recursively merges `extension` into `base`.
///
/// Groups present on both sides merge key by key. Any other collision
/// resolves in favor of the extension, including a leaf replacing a group
/// or a group replacing a leaf. Keys present on only one side are kept,
/// so sibling tokens in the base survive an extension that never mentions
/// them. Merging the same extension twice leaves the table unchanged.
pub fn deep_merge(base: &mut TokenTable, extension: &TokenTable) {
    for (key, incoming) in extension {
        match (base.get_mut(key), incoming) {
            (Some(TokenValue::Group(existing)), TokenValue::Group(additions)) => {
                deep_merge(existing, additions);
            }
            _ => {
                base.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Looks up an entry by dotted path, e.g. `colors.neon.blue`.
///
/// Returns `None` when a segment is missing or the path descends through a
/// leaf.
pub fn get_path<'a>(table: &'a TokenTable, path: &str) -> Option<&'a TokenValue> {
    let mut segments = path.split('.');
    let mut current = table.get(segments.next()?)?;
    for segment in segments {
        match current {
            TokenValue::Group(group) => current = group.get(segment)?,
            TokenValue::Value(_) => return None,
        }
    }
    Some(current)
}

/// Inserts an entry at a dotted path, creating intermediate groups as
/// needed. A leaf sitting on the path is replaced by a group so deeper
/// segments can attach.
pub fn set_path(table: &mut TokenTable, path: &str, value: TokenValue) {
    match path.split_once('.') {
        None => {
            table.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = table
                .entry(head.to_string())
                .or_insert_with(|| TokenValue::Group(TokenTable::new()));
            if !entry.is_group() {
                *entry = TokenValue::Group(TokenTable::new());
            }
            if let TokenValue::Group(group) = entry {
                set_path(group, rest, value);
            }
        }
    }
}

/// Collects every leaf under `table` as `(dotted path, value)` pairs, in
/// deterministic key order.
pub fn leaves(table: &TokenTable) -> Vec<(String, &str)> {
    let mut collected = Vec::new();
    collect_leaves(table, String::new(), &mut collected);
    collected
}

fn collect_leaves<'a>(table: &'a TokenTable, prefix: String, out: &mut Vec<(String, &'a str)>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            TokenValue::Value(leaf) => out.push((path, leaf.as_str())),
            TokenValue::Group(group) => collect_leaves(group, path, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, TokenValue)]) -> TokenTable {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    fn group(entries: &[(&str, TokenValue)]) -> TokenValue {
        TokenValue::Group(table(entries))
    }

    #[test]
    fn merge_keeps_unrelated_base_keys() {
        let mut base = table(&[("colors", group(&[("red", "#ef4444".into())]))]);
        let extension = table(&[("colors", group(&[("blue", "#3b82f6".into())]))]);

        deep_merge(&mut base, &extension);

        assert_eq!(
            get_path(&base, "colors.red").and_then(TokenValue::as_str),
            Some("#ef4444")
        );
        assert_eq!(
            get_path(&base, "colors.blue").and_then(TokenValue::as_str),
            Some("#3b82f6")
        );
    }

    #[test]
    fn merge_extension_wins_at_leaf_collisions() {
        let mut base = table(&[("colors", group(&[("primary", "#111111".into())]))]);
        let extension = table(&[("colors", group(&[("primary", "#222222".into())]))]);

        deep_merge(&mut base, &extension);

        assert_eq!(
            get_path(&base, "colors.primary").and_then(TokenValue::as_str),
            Some("#222222")
        );
    }

    #[test]
    fn merge_recurses_through_nested_groups() {
        let mut base = table(&[(
            "colors",
            group(&[("gray", group(&[("500", "#6b7280".into()), ("900", "#111827".into())]))]),
        )]);
        let extension = table(&[(
            "colors",
            group(&[("gray", group(&[("900", "#0f172a".into())]))]),
        )]);

        deep_merge(&mut base, &extension);

        assert_eq!(
            get_path(&base, "colors.gray.500").and_then(TokenValue::as_str),
            Some("#6b7280")
        );
        assert_eq!(
            get_path(&base, "colors.gray.900").and_then(TokenValue::as_str),
            Some("#0f172a")
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let mut once = table(&[("spacing", group(&[("4", "1rem".into())]))]);
        let extension = table(&[
            ("spacing", group(&[("5", "1.25rem".into())])),
            ("opacity", group(&[("faint", "0.25".into())])),
        ]);

        deep_merge(&mut once, &extension);
        let mut twice = once.clone();
        deep_merge(&mut twice, &extension);

        assert_eq!(once, twice);
    }

    #[test]
    fn merge_replaces_group_with_leaf_and_back() {
        let mut base = table(&[("shadow", group(&[("soft", "0 0 1px #000000".into())]))]);
        let as_leaf = table(&[("shadow", "none".into())]);
        deep_merge(&mut base, &as_leaf);
        assert_eq!(base.get("shadow").and_then(TokenValue::as_str), Some("none"));

        let as_group = table(&[("shadow", group(&[("hard", "0 0 0 #000000".into())]))]);
        deep_merge(&mut base, &as_group);
        assert!(base.get("shadow").is_some_and(TokenValue::is_group));
    }

    #[test]
    fn merge_preserves_unknown_categories() {
        let mut base = table(&[("colors", group(&[("ink", "#111827".into())]))]);
        let extension = table(&[(
            "typographyScale",
            group(&[("prose", group(&[("measure", "65ch".into())]))]),
        )]);

        deep_merge(&mut base, &extension);

        assert_eq!(
            get_path(&base, "typographyScale.prose.measure").and_then(TokenValue::as_str),
            Some("65ch")
        );
        assert_eq!(
            get_path(&base, "colors.ink").and_then(TokenValue::as_str),
            Some("#111827")
        );
    }

    #[test]
    fn get_path_stops_at_leaves() {
        let table = table(&[("colors", group(&[("white", "#ffffff".into())]))]);

        assert!(get_path(&table, "colors.white.deeper").is_none());
        assert!(get_path(&table, "colors.missing").is_none());
        assert!(get_path(&table, "colors").is_some_and(TokenValue::is_group));
    }

    #[test]
    fn set_path_creates_intermediate_groups() {
        let mut table = TokenTable::new();
        set_path(&mut table, "colors.brand.primary", "#2563eb".into());

        assert_eq!(
            get_path(&table, "colors.brand.primary").and_then(TokenValue::as_str),
            Some("#2563eb")
        );
    }

    #[test]
    fn set_path_replaces_a_leaf_on_the_way_down() {
        let mut table = table(&[("colors", "#ffffff".into())]);
        set_path(&mut table, "colors.white", "#ffffff".into());

        assert_eq!(
            get_path(&table, "colors.white").and_then(TokenValue::as_str),
            Some("#ffffff")
        );
    }

    #[test]
    fn leaves_walk_in_key_order_with_dotted_paths() {
        let table = table(&[(
            "colors",
            group(&[
                ("base", group(&[("bg", "#f7f8fb".into()), ("ink", "#111827".into())])),
                ("white", "#ffffff".into()),
            ]),
        )]);

        let collected = leaves(&table);
        let paths: Vec<&str> = collected.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, vec!["colors.base.bg", "colors.base.ink", "colors.white"]);
    }

    #[test]
    fn token_values_deserialize_from_strings_and_maps() {
        let leaf: TokenValue = serde_yaml::from_str("\"#3b82f6\"").expect("leaf should parse");
        assert_eq!(leaf.as_str(), Some("#3b82f6"));

        let nested: TokenValue =
            serde_yaml::from_str("blue: \"#3b82f6\"\ngreen: \"#22c55e\"").expect("group should parse");
        let group = nested.as_group().expect("should be a group");
        assert_eq!(group.len(), 2);
    }
}
