use std::{
    fmt,
    ops::{Add, Mul},
};

use derive_more::{Constructor, From};

/// A point in pixels or grid cells, with (0; 0) at the top-left corner.
#[derive(Constructor, From, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

#[derive(Constructor, From, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

/// Defines a rectangle by its top-left corner and size.
/// Y axis points down, the same way image rows are stored.
#[derive(Constructor, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T: Copy> Rect<T> {
    #[inline]
    pub fn size(&self) -> Size<T> {
        Size::new(self.w, self.h)
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    #[inline]
    pub fn right(&self) -> T {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.h
    }
}

impl<T: Copy + Mul<Output = T>> Size<T> {
    #[inline]
    pub fn area(&self) -> T {
        self.w * self.h
    }
}

impl Rect<u32> {
    /// A square cell of a uniform grid: `cell` is measured in cells,
    /// the resulting rect in pixels. Saturates on overflow.
    pub fn cell(cell: Point<u32>, cell_size: u32) -> Self {
        Self::new(
            cell.x.saturating_mul(cell_size),
            cell.y.saturating_mul(cell_size),
            cell_size,
            cell_size,
        )
    }

    pub fn offset(self, by: Point<u32>) -> Self {
        Self::new(
            self.x.saturating_add(by.x),
            self.y.saturating_add(by.y),
            self.w,
            self.h,
        )
    }

    /// Returns true when the whole rect lies inside an image of `size`.
    /// Empty rects are never considered inside.
    pub fn fits_within(&self, size: Size<u32>) -> bool {
        if self.w == 0 || self.h == 0 {
            return false;
        }

        match (self.x.checked_add(self.w), self.y.checked_add(self.h)) {
            (Some(right), Some(bottom)) => right <= size.w && bottom <= size.h,
            _ => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}; {})", self.w, self.h, self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_and_offset() {
        let rect = Rect::cell(Point::new(2, 3), 50).offset(Point::new(600, 0));
        assert_eq!(rect, Rect::new(700, 150, 50, 50));
        assert_eq!(rect.right(), 750);
        assert_eq!(rect.bottom(), 200);
    }

    #[test]
    fn test_fits_within() {
        let size = Size::new(300, 400);

        assert!(Rect::new(0, 0, 300, 400).fits_within(size));
        assert!(Rect::new(250, 350, 50, 50).fits_within(size));
        assert!(!Rect::new(251, 350, 50, 50).fits_within(size));
        assert!(!Rect::new(0, 400, 50, 50).fits_within(size));
        assert!(!Rect::new(0, 0, 0, 50).fits_within(size));
        assert!(!Rect::new(u32::MAX, 0, 50, 50).fits_within(size));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "3x4 at (1; 2)");
        assert_eq!(Size::new(6, 8).to_string(), "6x8");
    }
}
