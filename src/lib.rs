//! Caste Snake - a terminal snake game with four snake castes
//!
//! This library provides:
//! - Core game logic (game module)
//! - A cancellable tick scheduler (scheduler module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scheduler;
