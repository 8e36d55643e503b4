use clangen_geometry::{Rect, Size};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("pixel buffer holds {len} pixels, but {size} image needs {expected}")]
    PixelCount {
        size: Size<u32>,
        len: usize,
        expected: usize,
    },

    #[error("spritesheet `{0}` is not loaded")]
    UnknownSheet(String),

    #[error("region {region} is outside of the {size} image")]
    RegionOutOfBounds { region: Rect<u32>, size: Size<u32> },
}
