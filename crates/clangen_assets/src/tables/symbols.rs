use anyhow::Result;
use derive_more::Deref;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SymbolEntry {
    /// Number of sprite variants drawn for this symbol. Zero hides the symbol.
    pub variants: u32,
}

/// Clan symbols keyed by name, in the order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Deref)]
#[serde(transparent)]
pub struct SymbolVariantTable(IndexMap<String, SymbolEntry>);

impl SymbolVariantTable {
    pub fn decode(json: &str) -> Result<SymbolVariantTable> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn variants(&self, name: &str) -> Option<u32> {
        self.0.get(name).map(|entry| entry.variants)
    }

    /// Symbols with at least one variant whose name starts with `letter`.
    pub fn starting_with(&self, letter: char) -> impl Iterator<Item = (&str, u32)> {
        self.0
            .iter()
            .filter(move |(name, entry)| {
                entry.variants > 0 && name.to_uppercase().starts_with(letter)
            })
            .map(|(name, entry)| (name.as_str(), entry.variants))
    }
}

impl FromIterator<(String, u32)> for SymbolVariantTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, variants)| (name, SymbolEntry { variants }))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_decode_keeps_file_order() {
        let table = SymbolVariantTable::decode(
            r#"{
                "SPRING": { "variants": 2 },
                "ASH": { "variants": 1, "description": "ignored" },
                "SHADE": { "variants": 0 }
            }"#,
        )
        .unwrap();

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["SPRING", "ASH", "SHADE"]);
        assert_eq!(table.variants("SPRING"), Some(2));
        assert_eq!(table.variants("SHADE"), Some(0));
        assert_eq!(table.variants("MOSS"), None);
    }

    #[test]
    fn test_invalid_variants_are_rejected() {
        assert!(SymbolVariantTable::decode(r#"{ "SPRING": { "variants": -1 } }"#).is_err());
        assert!(SymbolVariantTable::decode(r#"{ "SPRING": { "variants": "two" } }"#).is_err());
        assert!(SymbolVariantTable::decode(r#"{ "SPRING": {} }"#).is_err());
        assert!(SymbolVariantTable::decode(r#"["SPRING"]"#).is_err());
    }

    #[test]
    fn test_starting_with_skips_hidden_symbols() {
        let table: SymbolVariantTable = [
            ("Sage".to_string(), 1),
            ("ASH".to_string(), 3),
            ("SHADE".to_string(), 0),
            ("SPRING".to_string(), 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            table.starting_with('S').collect::<Vec<_>>(),
            vec![("Sage", 1), ("SPRING", 2)]
        );
        assert_eq!(table.starting_with('A').collect::<Vec<_>>(), vec![("ASH", 3)]);
        assert_eq!(table.starting_with('U').count(), 0);
    }
}
