use clangen_assets::{tables::SymbolVariantTable, Atlas, GroupLayout};
use clangen_geometry::Point;

/// Row order of the symbol sheet. No symbol names start with U or X,
/// so those letters have no row.
pub const SYMBOL_LETTERS: [char; 24] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'V', 'W', 'Y', 'Z',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPlacement {
    /// Sprite key, formatted as `symbol{NAME}{variant}`, e.g. `symbolSPRING0`.
    pub key: String,
    /// Position on the symbol sheet in tiles.
    pub pos: Point<u32>,
}

/// Computes where every symbol variant lives on the symbol sheet.
///
/// Each letter starts a new row (the first one being row 1). Within a row
/// symbols are placed by their index among symbols of that letter, and
/// variants are shifted right by the running sum of variant indices.
/// Positions saturate at `u32::MAX`, such a variant ends up off the sheet.
pub fn symbol_placements(table: &SymbolVariantTable) -> Vec<SymbolPlacement> {
    let mut placements = Vec::new();

    for (y_pos, letter) in (1..).zip(SYMBOL_LETTERS) {
        for (i, (name, variants)) in table.starting_with(letter).enumerate() {
            let name = name.to_uppercase();
            let mut x_mod: u32 = 0;

            for variant_index in 0..variants {
                x_mod = x_mod.saturating_add(variant_index);
                placements.push(SymbolPlacement {
                    key: format!("symbol{name}{variant_index}"),
                    pos: Point::new((i as u32).saturating_add(x_mod), y_pos),
                });
            }
        }
    }

    placements
}

/// Registers every symbol variant and returns their keys in placement order.
pub(crate) fn register(atlas: &mut Atlas, table: &SymbolVariantTable) -> Vec<String> {
    symbol_placements(table)
        .into_iter()
        .map(|placement| {
            atlas.make_group("symbols", placement.pos, &placement.key, GroupLayout::single());
            placement.key
        })
        .collect()
}
