use super::board::Board;
use super::direction::Direction;
use super::point::Point;
use super::state::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Head,
    Body,
    Tail,
    Food,
}

/// One drawable cell
#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: Point,
    pub direction: Option<Direction>,
    pub dead: bool,
}

/// The display fields shown beside the board
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfo {
    pub score: u32,
    /// Rounded to two decimals
    pub speed: f64,
    pub size: usize,
    pub caste: String,
    pub name: String,
}

/// Read-only view of a game for the render layer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub board: Board,
    pub color: String,
    pub status: GameStatus,
    /// Snake segments head first, followed by the food
    pub entities: Vec<EntityView>,
    pub info: GameInfo,
}

impl Snapshot {
    /// The entity drawn at `p`, preferring snake segments over food
    pub fn entity_at(&self, p: Point) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.position == p)
    }
}
