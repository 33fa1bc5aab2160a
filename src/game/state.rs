use std::time::Duration;

use super::board::Board;
use super::entity::Food;
use super::snake::Snake;
use super::snapshot::{EntityKind, EntityView, GameInfo, Snapshot};

/// Upper bound on the timed tick delay
pub const SLOWEST_TICK: Duration = Duration::from_secs(10);

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into one of its own segments
    SelfCollision,
}

/// Complete state of one game. A restart replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    pub ticks: u32,
    /// Name the player gave their snake
    pub name: String,
}

impl GameState {
    pub fn new(board: Board, snake: Snake, food: Food) -> Self {
        Self {
            board,
            snake,
            food,
            status: GameStatus::Running,
            ticks: 0,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Delay until the next timed tick at the snake's current speed, capped
    /// at [`SLOWEST_TICK`]
    pub fn tick_interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.snake.speed)
            .map_or(SLOWEST_TICK, |interval| interval.min(SLOWEST_TICK))
    }

    /// Everything a renderer needs to draw this frame
    pub fn snapshot(&self) -> Snapshot {
        let mut entities: Vec<EntityView> = self
            .snake
            .segments()
            .iter()
            .map(|segment| EntityView {
                kind: if segment.is_head {
                    EntityKind::Head
                } else if segment.is_tail {
                    EntityKind::Tail
                } else {
                    EntityKind::Body
                },
                position: segment.position,
                direction: segment.direction,
                dead: segment.is_dead,
            })
            .collect();

        entities.push(EntityView {
            kind: EntityKind::Food,
            position: self.food.position,
            direction: None,
            dead: false,
        });

        Snapshot {
            board: self.board,
            color: self.snake.color.clone(),
            status: self.status,
            entities,
            info: GameInfo {
                score: self.snake.score,
                speed: (self.snake.speed * 100.0).round() / 100.0,
                size: self.snake.size(),
                caste: self.snake.caste_label().to_string(),
                name: self.name.clone(),
            },
        }
    }
}
