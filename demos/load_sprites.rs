use std::path::PathBuf;

use anyhow::Result;
use clangen::{
    sprites::{settings::GameConfig, SpritesSettings},
    Sprites,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Loads every sprite from the game directory passed as the first argument
/// (current directory by default) and prints a short summary.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut settings = SpritesSettings::new(&root);
    let config_path = root.join("resources/game_config.json");
    if let Ok(json) = std::fs::read_to_string(&config_path) {
        settings.apply_game_config(&GameConfig::decode(&json)?);
    }

    let sprites = Sprites::load(settings);
    let atlas = sprites.atlas();

    info!(
        "{} sprites of {}px, {} placeholders, {} clan symbols",
        atlas.len(),
        sprites.tile_size(),
        atlas.missing_count(),
        sprites.clan_symbols().len()
    );

    for key in ["lines0", "singleWHITE0", "eyesYELLOW0", "collarsCRIMSON0"] {
        match sprites.sprite(key) {
            Some(sprite) if !atlas.is_placeholder(sprite) => info!("{key}: {}", sprite.region()),
            Some(_) => info!("{key}: placeholder"),
            None => info!("{key}: not registered"),
        }
    }

    Ok(())
}
