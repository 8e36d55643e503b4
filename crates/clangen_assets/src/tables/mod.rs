use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

pub mod symbols;
pub mod tint;

pub use symbols::{SymbolEntry, SymbolVariantTable};
pub use tint::TintTable;

/// Reads and decodes a json table.
pub fn read_table<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read {}", path.display()))?;

    serde_json::from_str(&json).with_context(|| format!("unable to parse {}", path.display()))
}

/// Same as [read_table], but a table that can't be read or parsed is
/// reported and replaced with an empty one.
pub fn load_table_or_default<T: DeserializeOwned + Default>(path: impl AsRef<Path>, what: &str) -> T {
    match read_table(path) {
        Ok(table) => table,
        Err(e) => {
            warn!("{what} not loaded, using an empty table: {e:#}");
            T::default()
        }
    }
}
