use super::point::Point;

/// Anything that occupies exactly one board cell
pub trait Placeable {
    fn position(&self) -> Point;

    /// Check if this object sits on `p`
    fn is_at(&self, p: Point) -> bool {
        self.position() == p
    }

    fn is_at_same_position_as(&self, other: &impl Placeable) -> bool {
        self.is_at(other.position())
    }
}

/// A piece of food. There is at most one on the board at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
}

impl Food {
    pub fn new(position: Point) -> Self {
        Self { position }
    }
}

impl Placeable for Food {
    fn position(&self) -> Point {
        self.position
    }
}
