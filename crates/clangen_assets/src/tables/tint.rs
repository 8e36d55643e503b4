use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use rgb::RGB8;
use serde::Deserialize;

/// Tint colours applied to cat sprites at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TintTable {
    /// Tint names available to each colour group, e.g. `basic`, `black`.
    pub possible_tints: IndexMap<String, Vec<String>>,
    /// Maps a pelt colour to a colour group of `possible_tints`.
    pub colour_groups: IndexMap<String, String>,
    /// Tints multiplied with the sprite.
    pub tint_colours: IndexMap<String, [u8; 3]>,
    /// Tints added to the sprite.
    pub dilute_tint_colours: IndexMap<String, [u8; 3]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Multiply(RGB8),
    Add(RGB8),
}

impl TintTable {
    pub fn decode(json: &str) -> Result<TintTable> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.possible_tints.is_empty()
            && self.colour_groups.is_empty()
            && self.tint_colours.is_empty()
            && self.dilute_tint_colours.is_empty()
    }

    pub fn tint(&self, name: &str) -> Option<Tint> {
        let rgb = |[r, g, b]: [u8; 3]| RGB8::new(r, g, b);

        self.tint_colours
            .get(name)
            .map(|&c| Tint::Multiply(rgb(c)))
            .or_else(|| self.dilute_tint_colours.get(name).map(|&c| Tint::Add(rgb(c))))
    }

    pub fn tints_for_group(&self, group: &str) -> &[String] {
        self.possible_tints
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Tint names offered in `possible_tints` that have no colour.
    /// `none` is a valid choice meaning "don't tint".
    pub fn dangling_tints(&self) -> IndexSet<&str> {
        self.possible_tints
            .values()
            .flatten()
            .map(String::as_str)
            .filter(|&name| name != "none" && self.tint(name).is_none())
            .collect()
    }
}
