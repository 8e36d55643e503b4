use clangen_geometry::{Point, Rect, Size};
use smart_default::SmartDefault;

/// How a group of sprites is laid out on a sheet.
///
/// Sheets are split into groups, each group being a `sprites_x` by
/// `sprites_y` block of tiles (one tile per cat pose). A group is addressed
/// by its position in groups, not in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub struct GroupLayout {
    #[default(6)]
    pub sprites_x: u32,
    #[default(8)]
    pub sprites_y: u32,
    /// Register the sprite under the bare group name, without a pose index.
    pub no_index: bool,
}

impl GroupLayout {
    pub fn new(sprites_x: u32, sprites_y: u32) -> Self {
        Self {
            sprites_x,
            sprites_y,
            no_index: false,
        }
    }

    /// A group of exactly one sprite, named without an index.
    pub fn single() -> Self {
        Self {
            sprites_x: 1,
            sprites_y: 1,
            no_index: true,
        }
    }

    #[inline]
    pub fn grid(&self) -> Size<u32> {
        Size::new(self.sprites_x, self.sprites_y)
    }

    /// Top-left pixel of the group at `pos`.
    pub fn origin(&self, pos: Point<u32>, tile_size: u32) -> Point<u32> {
        Point::new(
            pos.x.saturating_mul(self.sprites_x).saturating_mul(tile_size),
            pos.y.saturating_mul(self.sprites_y).saturating_mul(tile_size),
        )
    }

    /// Key and pixel region of every tile in the group, row by row.
    pub fn tiles<'a>(
        &self,
        pos: Point<u32>,
        name: &'a str,
        tile_size: u32,
    ) -> impl Iterator<Item = (String, Rect<u32>)> + 'a {
        let layout = *self;
        let origin = self.origin(pos, tile_size);

        (0..layout.sprites_y)
            .flat_map(move |y| (0..layout.sprites_x).map(move |x| Point::new(x, y)))
            .enumerate()
            .map(move |(i, cell)| {
                let key = match layout.no_index {
                    true => name.to_string(),
                    false => format!("{name}{i}"),
                };

                (key, Rect::cell(cell, tile_size).offset(origin))
            })
    }
}

/// Derives the tile size from a reference sheet laid out as `grid` tiles.
/// Returns `None` when the sheet proportions don't match the grid or
/// the tiles wouldn't be a whole number of pixels.
pub fn infer_tile_size(reference: Size<u32>, grid: Size<u32>) -> Option<u32> {
    if grid.w == 0 || grid.h == 0 {
        return None;
    }

    let proportional = reference.w as u64 * grid.h as u64 == reference.h as u64 * grid.w as u64;
    if !proportional || reference.w % grid.w != 0 {
        return None;
    }

    match reference.w / grid.w {
        0 => None,
        size => Some(size),
    }
}
