use std::path::Path;

use anyhow::Result;
use clangen_assets::{
    atlas::infer_tile_size,
    png::load_png,
    tables::{load_table_or_default, SymbolVariantTable, TintTable},
    Atlas, GroupLayout, Sprite,
};
use clangen_geometry::Point;
use tracing::{info, warn};

pub mod accessories;
pub mod pelts;
pub mod settings;
pub mod sheets;
pub mod symbols;

#[cfg(test)]
mod fixtures;

pub use settings::{GameConfig, SpritesSettings, DEFAULT_TILE_SIZE};

/// Holds every spritesheet, the sprites sliced from them and
/// the tint tables the renderer needs to composite a cat.
#[derive(Debug)]
pub struct Sprites {
    settings: SpritesSettings,
    atlas: Atlas,
    cat_tints: TintTable,
    white_patches_tints: TintTable,
    symbol_table: SymbolVariantTable,
    clan_symbols: Vec<String>,
}

impl Sprites {
    /// Creates an empty context and loads tint tables.
    /// Sprites are loaded separately by [Sprites::load_all].
    pub fn new(settings: SpritesSettings) -> Self {
        let tile_size = settings.tile_size.unwrap_or(DEFAULT_TILE_SIZE);
        let mut sprites = Self {
            settings,
            atlas: Atlas::new(tile_size),
            cat_tints: TintTable::default(),
            white_patches_tints: TintTable::default(),
            symbol_table: SymbolVariantTable::default(),
            clan_symbols: Vec::new(),
        };

        sprites.load_tints();
        sprites
    }

    /// Creates a context with every sprite loaded.
    pub fn load(settings: SpritesSettings) -> Self {
        let mut sprites = Self::new(settings);
        sprites.load_all();
        sprites
    }

    pub fn load_tints(&mut self) {
        self.cat_tints = load_table_or_default(self.settings.tint_path(), "Tints");
        self.white_patches_tints =
            load_table_or_default(self.settings.white_patches_tint_path(), "White Patches Tints");

        for (table, tints) in [
            ("tint", &self.cat_tints),
            ("white patches tint", &self.white_patches_tints),
        ] {
            for name in tints.dangling_tints() {
                warn!("{table} `{name}` is offered, but has no colour");
            }
        }
    }

    /// Adds a spritesheet called `name` from `path`.
    pub fn spritesheet(&mut self, path: impl AsRef<Path>, name: &str) -> Result<()> {
        self.atlas.load_sheet(path, name)
    }

    /// Divides a group of sprites on a spritesheet into separately accessible sprites.
    /// See [Atlas::make_group].
    pub fn make_group(
        &mut self,
        sheet: &str,
        pos: impl Into<Point<u32>>,
        name: &str,
        layout: GroupLayout,
    ) {
        self.atlas.make_group(sheet, pos, name, layout);
    }

    /// Loads every spritesheet and slices it into sprites, replacing
    /// whatever was loaded before.
    pub fn load_all(&mut self) {
        let tile_size = self.resolve_tile_size();
        self.atlas = Atlas::new(tile_size);

        for sheet in sheets::SHEET_NAMES {
            let path = self.settings.sheet_path(sheet);
            if let Err(e) = self.atlas.load_sheet(&path, sheet) {
                warn!("unable to load spritesheet `{sheet}`: {e:#}");
            }
        }

        pelts::register(&mut self.atlas);
        self.load_scars();
        self.load_symbols();

        info!(
            sprites = self.atlas.len(),
            sheets = self.atlas.sheet_count(),
            missing = self.atlas.missing_count(),
            tile_size,
            "loaded sprites"
        );
    }

    /// Loads scars, missing body parts and accessories.
    pub fn load_scars(&mut self) {
        accessories::register(&mut self.atlas);
    }

    /// Loads the clan symbol table and slices every symbol variant.
    pub fn load_symbols(&mut self) {
        self.symbol_table =
            load_table_or_default(self.settings.clan_symbols_path(), "Clan Symbols");
        self.clan_symbols = symbols::register(&mut self.atlas, &self.symbol_table);
    }

    fn resolve_tile_size(&self) -> u32 {
        match self.settings.tile_size {
            Some(0) => warn!("tile size override must not be zero, ignoring it"),
            Some(size) => return size,
            None => {}
        }

        let path = self.settings.lineart_path();
        let lineart = match load_png(&path) {
            Ok(lineart) => lineart,
            Err(e) => {
                warn!("{e:#}, falling back to {DEFAULT_TILE_SIZE}");
                return DEFAULT_TILE_SIZE;
            }
        };

        let grid = GroupLayout::default().grid();
        match infer_tile_size(lineart.size(), grid) {
            Some(size) => size,
            None => {
                warn!(
                    "lineart.png is {}, which is not a {grid} grid, falling back to {DEFAULT_TILE_SIZE}",
                    lineart.size()
                );
                DEFAULT_TILE_SIZE
            }
        }
    }

    pub fn sprite(&self, key: &str) -> Option<&Sprite> {
        self.atlas.get(key)
    }

    #[inline]
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.atlas.tile_size()
    }

    pub fn settings(&self) -> &SpritesSettings {
        &self.settings
    }

    pub fn cat_tints(&self) -> &TintTable {
        &self.cat_tints
    }

    pub fn white_patches_tints(&self) -> &TintTable {
        &self.white_patches_tints
    }

    pub fn symbol_table(&self) -> &SymbolVariantTable {
        &self.symbol_table
    }

    /// Keys of every clan symbol sprite, e.g. `symbolSPRING0`.
    pub fn clan_symbols(&self) -> &[String] {
        &self.clan_symbols
    }
}

/// Registers one group per name, `rows[y][x]` being the group at `(x, y)`.
pub(crate) fn register_rows(atlas: &mut Atlas, sheet: &str, rows: &[&[&str]], prefix: &str) {
    for (row, names) in rows.iter().enumerate() {
        for (col, name) in names.iter().enumerate() {
            atlas.make_group(
                sheet,
                (col as u32, row as u32),
                &format!("{prefix}{name}"),
                GroupLayout::default(),
            );
        }
    }
}
