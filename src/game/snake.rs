use rand::Rng;

use super::caste::Caste;
use super::direction::Direction;
use super::entity::Placeable;
use super::point::Point;
use super::segment::Segment;

/// Starting speed in board cells per second
pub const INITIAL_SPEED: f64 = 5.0;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Segments, with head at index 0
    segments: Vec<Segment>,
    pub color: String,
    /// Cells per second
    pub speed: f64,
    pub score: u32,
    pub caste: Caste,
}

impl Snake {
    /// Create a one-segment snake; its head is also its tail
    pub fn new(caste: Caste, color: impl Into<String>, position: Point, direction: Direction) -> Self {
        Self {
            segments: vec![Segment::new(position, Some(direction), true, true)],
            color: color.into(),
            speed: INITIAL_SPEED,
            score: 0,
            caste,
        }
    }

    /// Override the starting speed
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// The number of segments
    pub fn size(&self) -> usize {
        self.segments.len()
    }

    pub fn caste_label(&self) -> &'static str {
        self.caste.label()
    }

    /// Point the head somewhere new. The rest of the body follows on later
    /// ticks. Reversing onto the neck is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.segments[0].direction = Some(direction);
    }

    pub fn direction(&self) -> Option<Direction> {
        self.head().direction
    }

    pub fn next_head_position(&self) -> Point {
        self.head().next_position()
    }

    pub fn is_head_on(&self, object: &impl Placeable) -> bool {
        self.head().is_at_same_position_as(object)
    }

    /// Check if any segment, head and tail included, currently sits on `p`
    pub fn occupies(&self, p: Point) -> bool {
        self.segments.iter().any(|s| s.is_at(p))
    }

    /// Move every segment one cell and hand each segment's old direction to
    /// the segment behind it. The head keeps its own direction.
    pub fn slither(&mut self) {
        let mut carried = self.segments[0].direction;
        for segment in &mut self.segments {
            segment.position = segment.next_position();
            carried = std::mem::replace(&mut segment.direction, carried);
        }
    }

    /// Append a new tail where the current tail sits, if the caste's growth
    /// roll allows it
    pub fn grow<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Segment> {
        if !self.caste.profile().grows(rng) {
            return None;
        }

        let last = self.segments.len() - 1;
        self.segments[last].untail();
        let position = self.segments[last].position;
        self.segments.push(Segment::tail(position));

        self.segments.last()
    }

    pub fn increment_score(&mut self) {
        self.score += self.caste.profile().score_increment;
    }

    pub fn speed_up(&mut self) {
        self.speed *= self.caste.profile().speed_multiplier;
    }

    pub fn kill(&mut self) {
        for segment in &mut self.segments {
            segment.kill();
        }
    }

    pub fn is_dead(&self) -> bool {
        self.head().is_dead
    }
}
