use clangen_geometry::{Rect, Size};
use rgb::{ComponentBytes, RGBA8};

use crate::error::AssetError;

/// A decoded RGBA8 image, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    size: Size<u32>,
    pixels: Vec<RGBA8>,
}

impl Image {
    pub fn new(size: Size<u32>, pixels: Vec<RGBA8>) -> Result<Self, AssetError> {
        let expected = pixel_count(size);
        if pixels.len() != expected {
            return Err(AssetError::PixelCount {
                size,
                len: pixels.len(),
                expected,
            });
        }

        Ok(Self { size, pixels })
    }

    /// A fully transparent image.
    pub fn blank(size: Size<u32>) -> Self {
        Self {
            size,
            pixels: vec![RGBA8::new(0, 0, 0, 0); pixel_count(size)],
        }
    }

    /// Builds an image by evaluating `f` for every pixel.
    pub fn from_fn(size: Size<u32>, mut f: impl FnMut(u32, u32) -> RGBA8) -> Self {
        let mut pixels = Vec::with_capacity(pixel_count(size));
        for y in 0..size.h {
            for x in 0..size.w {
                pixels.push(f(x, y));
            }
        }

        Self { size, pixels }
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        self.size
    }

    #[inline]
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        if x >= self.size.w || y >= self.size.h {
            return None;
        }

        self.pixels
            .get(y as usize * self.size.w as usize + x as usize)
            .copied()
    }

    /// Copies a region into a new owned image.
    pub fn crop(&self, region: Rect<u32>) -> Result<Image, AssetError> {
        if !region.fits_within(self.size) {
            return Err(AssetError::RegionOutOfBounds {
                region,
                size: self.size,
            });
        }

        let stride = self.size.w as usize;
        let mut pixels = Vec::with_capacity(pixel_count(region.size()));
        for row in region.y..region.bottom() {
            let start = row as usize * stride + region.x as usize;
            pixels.extend_from_slice(&self.pixels[start..start + region.w as usize]);
        }

        Ok(Image {
            size: region.size(),
            pixels,
        })
    }
}

fn pixel_count(size: Size<u32>) -> usize {
    Size::new(size.w as usize, size.h as usize).area()
}
