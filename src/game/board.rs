use rand::Rng;

use super::point::Point;

/// Terminal columns used to draw one board cell
pub const CELL_COLUMNS: u16 = 2;

/// Largest allowed width or height, in cells. Keeps every coordinate
/// representable as an `i32`.
pub const MAX_SIDE: usize = 1024;

/// The rectangular grid the snake lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
}

impl Board {
    /// Sides larger than [`MAX_SIDE`] are clamped to it
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.min(MAX_SIDE),
            height: height.min(MAX_SIDE),
        }
    }

    /// Size a board to fill a character area.
    ///
    /// Leaves one cell of margin on the left, right and bottom, and never
    /// shrinks below a single cell.
    pub fn fit(cols: u16, rows: u16) -> Self {
        let width = (cols / CELL_COLUMNS).saturating_sub(2).max(1);
        let height = rows.saturating_sub(1).max(1);
        Self::new(width as usize, height as usize)
    }

    /// Check if a point lies on the board
    pub fn is_inside(&self, p: Point) -> bool {
        p.x >= 0
            && (p.x as i64) < self.width as i64
            && p.y >= 0
            && (p.y as i64) < self.height as i64
    }

    /// A uniformly random cell. An empty board yields the origin.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        if self.is_empty() {
            return Point::new(0, 0);
        }
        let x = rng.gen_range(0..self.width) as i32;
        let y = rng.gen_range(0..self.height) as i32;
        Point::new(x, y)
    }

    /// The middle cell, rounded down
    pub fn midpoint(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
