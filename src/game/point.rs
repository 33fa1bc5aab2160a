use super::direction::Direction;

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell in `direction`, or this cell when there is none
    pub fn stepped(&self, direction: Option<Direction>) -> Self {
        match direction {
            Some(direction) => {
                let (dx, dy) = direction.delta();
                self.moved_by(dx, dy)
            }
            None => *self,
        }
    }
}
