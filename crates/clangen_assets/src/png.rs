use std::path::Path;

use anyhow::{Context, Result};
use clangen_geometry::Size;

use crate::image::Image;

pub fn decode_png(png: &[u8]) -> Result<Image> {
    let image = lodepng::decode32(png)?;
    let size = Size::new(image.width as u32, image.height as u32);

    Ok(Image::new(size, image.buffer)?)
}

pub fn load_png(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let png = std::fs::read(path).with_context(|| format!("unable to read {}", path.display()))?;

    decode_png(&png).with_context(|| format!("unable to decode {}", path.display()))
}

pub fn encode_png(image: &Image) -> Result<Vec<u8>> {
    let size = image.size();

    Ok(lodepng::encode32(
        image.pixels(),
        size.w as usize,
        size.h as usize,
    )?)
}

#[cfg(test)]
mod tests {
    use rgb::RGBA8;

    use super::*;

    #[test]
    fn test_decode_encoded() {
        let image = Image::from_fn(Size::new(5, 3), |x, y| RGBA8::new(x as u8 * 40, y as u8 * 80, 7, 200));

        let decoded = decode_png(&encode_png(&image).unwrap()).unwrap();

        assert_eq!(decoded, image);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_png(dir.path().join("lineart.png")).unwrap_err();

        assert!(error.to_string().contains("lineart.png"));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode_png(b"definitely not a png").is_err());
    }
}
