use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

use crate::sheets::LINEART;

/// Tile size used when it can't be derived from the lineart sheet.
pub const DEFAULT_TILE_SIZE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, SmartDefault, Deserialize)]
#[serde(default)]
pub struct SpritesSettings {
    /// Directory that contains `sprites/` and `resources/`.
    #[default(PathBuf::from("."))]
    pub assets_root: PathBuf,
    /// Load `aprilfools` variants of the lineart sheets.
    pub april_fools: bool,
    /// Overrides the tile size derived from `sprites/lineart.png`.
    pub tile_size: Option<u32>,
}

impl SpritesSettings {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
            ..Self::default()
        }
    }

    pub fn decode(json: &str) -> Result<SpritesSettings> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn apply_game_config(&mut self, config: &GameConfig) {
        self.april_fools = config.fun.april_fools;
    }

    pub fn sprites_dir(&self) -> PathBuf {
        self.assets_root.join("sprites")
    }

    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        match self.april_fools && sheet.contains(LINEART) {
            true => self.sprites_dir().join(format!("aprilfools{sheet}.png")),
            false => self.sprites_dir().join(format!("{sheet}.png")),
        }
    }

    /// The sheet tile size is measured on. Never replaced on april fools.
    pub fn lineart_path(&self) -> PathBuf {
        self.sprites_dir().join(format!("{LINEART}.png"))
    }

    pub fn tint_path(&self) -> PathBuf {
        self.dicts_dir(Path::new("sprites")).join("tint.json")
    }

    pub fn white_patches_tint_path(&self) -> PathBuf {
        self.dicts_dir(Path::new("sprites"))
            .join("white_patches_tint.json")
    }

    pub fn clan_symbols_path(&self) -> PathBuf {
        self.dicts_dir(Path::new("resources"))
            .join("clan_symbols.json")
    }

    fn dicts_dir(&self, parent: &Path) -> PathBuf {
        self.assets_root.join(parent).join("dicts")
    }
}

/// The part of the game configuration that affects sprite loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub fun: FunConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FunConfig {
    pub april_fools: bool,
}

impl GameConfig {
    pub fn decode(json: &str) -> Result<GameConfig> {
        Ok(serde_json::from_str(json)?)
    }
}
