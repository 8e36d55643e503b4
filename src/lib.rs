//! Sprite loading for a cat clan life simulation.
//!
//! Re-exports the workspace crates under one roof:
//! [geometry] for pixel math, [assets] for images, atlases and json tables,
//! and [sprites] for the game's fixed spritesheet layout.

pub use clangen_assets as assets;
pub use clangen_geometry as geometry;
pub use clangen_sprites as sprites;

pub use clangen_sprites::{Sprites, SpritesSettings};
