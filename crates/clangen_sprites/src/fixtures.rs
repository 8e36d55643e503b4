use std::path::Path;

use clangen_assets::{png::encode_png, rgb::RGBA8, Image};
use clangen_geometry::Size;
use tempfile::TempDir;

use crate::{sheets::SHEET_NAMES, SpritesSettings};

/// An asset directory where every sheet is large enough for 1 pixel tiles.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: tempfile::tempdir().unwrap(),
        };

        for sheet in SHEET_NAMES {
            match sheet {
                // 6x8 makes tiles exactly one pixel wide
                "lineart" => fixture.write_sheet(sheet, 6, 8),
                _ => fixture.write_sheet(sheet, 96, 48),
            }
        }

        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings(&self) -> SpritesSettings {
        SpritesSettings::new(self.root())
    }

    /// Writes a sheet where every pixel encodes its own coordinates.
    pub fn write_sheet(&self, sheet: &str, w: u32, h: u32) {
        let image = Image::from_fn(Size::new(w, h), |x, y| RGBA8::new(x as u8, y as u8, 0, 255));
        self.write_png(&format!("sprites/{sheet}.png"), &image);
    }

    pub fn write_image(&self, path: &str, w: u32, h: u32, colour: RGBA8) {
        let image = Image::from_fn(Size::new(w, h), |_, _| colour);
        self.write_png(path, &image);
    }

    pub fn write_file(&self, path: &str, contents: &str) {
        let path = self.root().join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.root().join(path)).unwrap();
    }

    fn write_png(&self, path: &str, image: &Image) {
        let path = self.root().join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, encode_png(image).unwrap()).unwrap();
    }
}
