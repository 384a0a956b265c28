// crates/huekit-core/src/meaning/table.rs
//
// Hand-authored descriptions keyed by normalized hex (uppercase, no '#').
// Built once at startup and only read afterwards.

use std::collections::{BTreeMap, HashMap};

use log::warn;
use serde::Deserialize;

use crate::color::Color;
use crate::error::{ColorError, Result};

const SECTION: &str = "meanings";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct MeaningTable {
    entries: HashMap<String, String>,
}

impl MeaningTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys are normalized; keys that are not 6 hex digits are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (k, v) in pairs {
            let key = k.as_ref();
            match Color::parse(key) {
                Ok(c) => {
                    entries.insert(c.normalized(), v.into());
                }
                Err(_) => warn!("meaning table: skipping non-hex key {key:?}"),
            }
        }
        Self { entries }
    }

    /// Accepts either a bare `"HEX" = "text"` table or a document with a
    /// `[meanings]` section. Non-string values are skipped.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut root: toml::Table =
            toml::from_str(s).map_err(|e| ColorError::Config(e.to_string()))?;

        let section = match root.remove(SECTION) {
            Some(toml::Value::Table(t)) => t,
            Some(_) => {
                return Err(ColorError::Config(format!("`{SECTION}` must be a table")));
            }
            None => root,
        };

        let mut pairs = Vec::with_capacity(section.len());
        for (k, v) in section {
            match v {
                toml::Value::String(text) => pairs.push((k, text)),
                other => warn!(
                    "meaning table: skipping {k:?}, expected a string, got {}",
                    other.type_str()
                ),
            }
        }
        Ok(Self::from_pairs(pairs))
    }

    pub fn get(&self, color: Color) -> Option<&str> {
        self.entries.get(&color.normalized()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, String>> for MeaningTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::from_pairs(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let t = MeaningTable::from_pairs([("#ff5733", "Sunset"), ("00aaff", "Sky")]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(Color::new(0xFF, 0x57, 0x33)), Some("Sunset"));
        assert_eq!(t.get(Color::new(0x00, 0xAA, 0xFF)), Some("Sky"));
    }

    #[test]
    fn invalid_keys_are_skipped() {
        let t = MeaningTable::from_pairs([("red", "nope"), ("12345", "short"), ("000000", "Black")]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn toml_bare_and_sectioned() {
        let bare = MeaningTable::from_toml_str("\"FF0000\" = \"Red\"\n").unwrap();
        assert_eq!(bare.get(Color::new(255, 0, 0)), Some("Red"));

        let doc = "extract_count = 5\n[meanings]\n\"#00ff00\" = \"Green\"\n";
        let sectioned = MeaningTable::from_toml_str(doc).unwrap();
        assert_eq!(sectioned.len(), 1);
        assert_eq!(sectioned.get(Color::new(0, 255, 0)), Some("Green"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        assert!(matches!(
            MeaningTable::from_toml_str("= oops"),
            Err(ColorError::Config(_))
        ));
        assert!(matches!(
            MeaningTable::from_toml_str("meanings = 3"),
            Err(ColorError::Config(_))
        ));
    }
}
