use std::{collections::HashMap, path::Path, rc::Rc};

use anyhow::Result;
use clangen_geometry::{Point, Rect, Size};
use indexmap::{IndexMap, IndexSet};
use rgb::RGBA8;
use tracing::{debug, warn};

use crate::{error::AssetError, image::Image, png::load_png};

pub mod group;

pub use group::{infer_tile_size, GroupLayout};

/// A single tile on a spritesheet. Sprites don't own pixels, they
/// reference a region of a shared sheet.
#[derive(Debug, Clone)]
pub struct Sprite {
    sheet: Rc<Image>,
    region: Rect<u32>,
}

impl Sprite {
    pub fn new(sheet: Rc<Image>, region: Rect<u32>) -> Result<Self, AssetError> {
        if !region.fits_within(sheet.size()) {
            return Err(AssetError::RegionOutOfBounds {
                region,
                size: sheet.size(),
            });
        }

        Ok(Self { sheet, region })
    }

    /// Location of the sprite on its sheet in pixels.
    #[inline]
    pub fn region(&self) -> Rect<u32> {
        self.region
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        self.region.size()
    }

    #[inline]
    pub fn sheet(&self) -> &Rc<Image> {
        &self.sheet
    }

    /// Pixel relative to the top-left corner of the sprite.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        if x >= self.region.w || y >= self.region.h {
            return None;
        }

        self.sheet.pixel(self.region.x + x, self.region.y + y)
    }

    /// Copies sprite pixels out of the sheet.
    pub fn to_image(&self) -> Result<Image, AssetError> {
        self.sheet.crop(self.region)
    }

    /// True when both sprites point to the same region of the same sheet.
    pub fn same_as(&self, other: &Sprite) -> bool {
        Rc::ptr_eq(&self.sheet, &other.sheet) && self.region == other.region
    }
}

/// Loaded spritesheets and sprites sliced from them, addressed by key.
#[derive(Debug)]
pub struct Atlas {
    tile_size: u32,
    sheets: HashMap<String, Rc<Image>>,
    sprites: IndexMap<String, Sprite>,
    /// Shared transparent sprite used in place of tiles that don't exist
    placeholder: Option<Sprite>,
    missing: IndexSet<String>,
}

impl Atlas {
    pub fn new(tile_size: u32) -> Self {
        Self {
            tile_size,
            sheets: HashMap::new(),
            sprites: IndexMap::new(),
            placeholder: None,
            missing: IndexSet::new(),
        }
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Registers an already decoded image as a spritesheet called `name`.
    pub fn add_sheet(&mut self, name: impl Into<String>, image: Image) {
        let name = name.into();
        debug!(sheet = %name, size = %image.size(), "registered spritesheet");
        self.sheets.insert(name, Rc::new(image));
    }

    /// Decodes the png at `path` and registers it as a spritesheet called `name`.
    pub fn load_sheet(&mut self, path: impl AsRef<Path>, name: impl Into<String>) -> Result<()> {
        let image = load_png(path)?;
        self.add_sheet(name, image);

        Ok(())
    }

    pub fn sheet(&self, name: &str) -> Option<&Image> {
        self.sheets.get(name).map(|sheet| sheet.as_ref())
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Slices a group of tiles out of `sheet` and registers each of them.
    ///
    /// `pos` is measured in groups, not in pixels. Tiles that are not
    /// fully inside the sheet, or come from a sheet that was never
    /// loaded, are replaced with the placeholder sprite.
    pub fn make_group(
        &mut self,
        sheet: &str,
        pos: impl Into<Point<u32>>,
        name: &str,
        layout: GroupLayout,
    ) {
        let source = self.sheets.get(sheet).cloned();
        if source.is_none() {
            warn!("{}", AssetError::UnknownSheet(sheet.to_string()));
        }

        for (key, region) in layout.tiles(pos.into(), name, self.tile_size) {
            let sprite = match &source {
                Some(image) if region.fits_within(image.size()) => {
                    self.missing.shift_remove(&key);
                    Sprite {
                        sheet: image.clone(),
                        region,
                    }
                }
                _ => {
                    warn!("nonexistent sprite - {key}");
                    let placeholder = self.placeholder();
                    self.missing.insert(key.clone());
                    placeholder
                }
            };

            if self.sprites.insert(key, sprite).is_some() {
                debug!(sheet, group = name, "sprite key registered twice, keeping the latest");
            }
        }
    }

    fn placeholder(&mut self) -> Sprite {
        let tile_size = self.tile_size;
        self.placeholder
            .get_or_insert_with(|| Sprite {
                sheet: Rc::new(Image::blank(Size::new(tile_size, tile_size))),
                region: Rect::new(0, 0, tile_size, tile_size),
            })
            .clone()
    }

    pub fn get(&self, key: &str) -> Option<&Sprite> {
        self.sprites.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sprites.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Sprite keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sprite)> {
        self.sprites.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_placeholder(&self, sprite: &Sprite) -> bool {
        self.placeholder
            .as_ref()
            .map_or(false, |placeholder| placeholder.same_as(sprite))
    }

    /// Keys that currently hold the placeholder, in the order they were missed.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::png::encode_png;

    /// Every pixel encodes its own coordinates.
    fn coordinates_sheet(w: u32, h: u32) -> Image {
        Image::from_fn(Size::new(w, h), |x, y| RGBA8::new(x as u8, y as u8, 0, 255))
    }

    #[test]
    fn test_group_regions_match_offsets() {
        let mut atlas = Atlas::new(2);
        atlas.add_sheet("eyes", coordinates_sheet(48, 32));

        atlas.make_group("eyes", (1, 1), "eyesAMBER", GroupLayout::default());

        let first = atlas.get("eyesAMBER0").unwrap();
        assert_eq!(first.region(), Rect::new(12, 16, 2, 2));
        assert_eq!(first.pixel(0, 0), Some(RGBA8::new(12, 16, 0, 255)));
        assert_eq!(first.pixel(1, 1), Some(RGBA8::new(13, 17, 0, 255)));
        assert_eq!(first.pixel(2, 0), None);

        let pose = atlas.get("eyesAMBER13").unwrap();
        assert_eq!(pose.region(), Rect::new(14, 20, 2, 2));
        assert_eq!(
            pose.to_image().unwrap(),
            coordinates_sheet(48, 32).crop(Rect::new(14, 20, 2, 2)).unwrap()
        );

        assert_eq!(atlas.len(), 48);
        assert_eq!(atlas.missing_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_tiles_use_placeholder() {
        let mut atlas = Atlas::new(2);
        atlas.add_sheet("scars", coordinates_sheet(24, 16));

        atlas.make_group("scars", (1, 0), "scarsTWO", GroupLayout::default());
        atlas.make_group("scars", (2, 0), "scarsTHREE", GroupLayout::default());

        let inside = atlas.get("scarsTWO0").unwrap();
        assert!(!atlas.is_placeholder(inside));

        let first = atlas.get("scarsTHREE0").unwrap();
        let last = atlas.get("scarsTHREE47").unwrap();
        assert!(atlas.is_placeholder(first));
        assert!(atlas.is_placeholder(last));
        assert!(Rc::ptr_eq(first.sheet(), last.sheet()));
        assert_eq!(first.size(), Size::new(2, 2));
        assert_eq!(first.pixel(1, 1), Some(RGBA8::new(0, 0, 0, 0)));

        assert_eq!(atlas.missing_count(), 48);
        assert_eq!(atlas.missing().next(), Some("scarsTHREE0"));
    }

    #[test]
    fn test_partially_covered_group() {
        let mut atlas = Atlas::new(1);
        atlas.add_sheet("collars", coordinates_sheet(6, 4));

        atlas.make_group("collars", (0, 0), "collarsRED", GroupLayout::default());

        assert_eq!(atlas.len(), 48);
        assert_eq!(atlas.missing_count(), 24);
        assert!(!atlas.is_placeholder(atlas.get("collarsRED23").unwrap()));
        assert!(atlas.is_placeholder(atlas.get("collarsRED24").unwrap()));
    }

    #[test]
    fn test_unknown_sheet_uses_placeholder() {
        let mut atlas = Atlas::new(50);

        atlas.make_group("symbols", (0, 1), "symbolSPRING0", GroupLayout::single());

        let sprite = atlas.get("symbolSPRING0").unwrap();
        assert!(atlas.is_placeholder(sprite));
        assert_eq!(atlas.missing().collect::<Vec<_>>(), vec!["symbolSPRING0"]);
    }

    #[test]
    fn test_reregistering_clears_missing() {
        let mut atlas = Atlas::new(1);

        atlas.make_group("lineart", (0, 0), "lines", GroupLayout::single());
        assert_eq!(atlas.missing_count(), 1);

        atlas.add_sheet("lineart", coordinates_sheet(6, 8));
        atlas.make_group("lineart", (0, 0), "lines", GroupLayout::single());

        assert_eq!(atlas.missing_count(), 0);
        assert!(!atlas.is_placeholder(atlas.get("lines").unwrap()));
    }

    #[test]
    fn test_keys_keep_registration_order() {
        let mut atlas = Atlas::new(1);
        atlas.add_sheet("skin", coordinates_sheet(12, 8));

        atlas.make_group("skin", (1, 0), "skinRED", GroupLayout::new(1, 2));
        atlas.make_group("skin", (0, 0), "skinBLACK", GroupLayout::new(1, 2));

        assert_eq!(
            atlas.keys().collect::<Vec<_>>(),
            vec!["skinRED0", "skinRED1", "skinBLACK0", "skinBLACK1"]
        );
    }

    #[test]
    fn test_load_sheet_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skin.png");
        std::fs::write(&path, encode_png(&coordinates_sheet(6, 8)).unwrap()).unwrap();

        let mut atlas = Atlas::new(1);
        atlas.load_sheet(&path, "skin").unwrap();

        assert_eq!(atlas.sheet("skin").map(Image::size), Some(Size::new(6, 8)));
        assert!(atlas.load_sheet(dir.path().join("eyes.png"), "eyes").is_err());
        assert_eq!(atlas.sheet_count(), 1);
    }

    #[test]
    fn test_sprite_new_validates_region() {
        let sheet = Rc::new(coordinates_sheet(4, 4));

        assert!(Sprite::new(sheet.clone(), Rect::new(2, 2, 2, 2)).is_ok());
        assert!(Sprite::new(sheet, Rect::new(3, 3, 2, 2)).is_err());
    }
}
