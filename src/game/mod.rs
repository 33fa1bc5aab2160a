//! Core game logic module for the caste snake game
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Each restart builds a fresh [`GameState`]; the [`GameEngine`] advances it one tick
//! at a time.

pub mod board;
pub mod caste;
pub mod config;
pub mod direction;
pub mod engine;
pub mod entity;
pub mod point;
pub mod segment;
pub mod snake;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use board::Board;
pub use caste::{Caste, CasteProfile};
pub use config::{GameConfig, Settings, load_config};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use entity::{Food, Placeable};
pub use point::Point;
pub use segment::Segment;
pub use snake::{INITIAL_SPEED, Snake};
pub use snapshot::{EntityKind, EntityView, GameInfo, Snapshot};
pub use state::{CollisionType, GameState, GameStatus};
