use super::direction::Direction;
use super::entity::Placeable;
use super::point::Point;

/// One cell of a snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub position: Point,
    /// `None` until the segment has followed a neighbour for one tick
    pub direction: Option<Direction>,
    pub is_head: bool,
    pub is_tail: bool,
    pub is_dead: bool,
}

impl Segment {
    pub fn new(position: Point, direction: Option<Direction>, is_head: bool, is_tail: bool) -> Self {
        Self {
            position,
            direction,
            is_head,
            is_tail,
            is_dead: false,
        }
    }

    /// A fresh tail with no direction yet
    pub fn tail(position: Point) -> Self {
        Self::new(position, None, false, true)
    }

    /// Where this segment will be after the next move
    pub fn next_position(&self) -> Point {
        self.position.stepped(self.direction)
    }

    pub fn untail(&mut self) {
        self.is_tail = false;
    }

    pub fn kill(&mut self) {
        self.is_dead = true;
    }
}

impl Placeable for Segment {
    fn position(&self) -> Point {
        self.position
    }
}
