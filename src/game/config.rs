use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::board::{Board, MAX_SIDE};
use super::caste::Caste;
use super::snake::INITIAL_SPEED;

pub const DEFAULT_SNAKE_COLOR: &str = "#721745";

/// Accepted range for `initial_speed`, in cells per second
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 1000.0;

/// What the player picks before each game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub caste: Caste,
    /// Any colour ratatui can parse, e.g. `#721745` or `green`
    pub color: String,
    /// Shown next to the score; purely decorative
    pub name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            caste: Caste::default(),
            color: DEFAULT_SNAKE_COLOR.to_string(),
            name: String::new(),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid; sized to the terminal when unset
    pub grid_width: Option<usize>,
    /// Height of the game grid; sized to the terminal when unset
    pub grid_height: Option<usize>,
    /// Speed of a new snake in cells per second
    pub initial_speed: f64,
    /// Advance only on key presses, never on a timer
    pub manual_tick: bool,
    /// In timer mode, advance immediately whenever the player steers
    pub tick_on_steer: bool,
    pub settings: Settings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: None,
            grid_height: None,
            initial_speed: INITIAL_SPEED,
            manual_tick: false,
            tick_on_steer: true,
            settings: Settings::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a fixed grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: Some(width),
            grid_height: Some(height),
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_caste(mut self, caste: Caste) -> Self {
        self.settings.caste = caste;
        self
    }

    pub fn with_manual_tick(mut self, manual_tick: bool) -> Self {
        self.manual_tick = manual_tick;
        self
    }

    /// The configured board, if both dimensions are pinned
    pub fn fixed_board(&self) -> Option<Board> {
        match (self.grid_width, self.grid_height) {
            (Some(width), Some(height)) => Some(Board::new(width, height)),
            _ => None,
        }
    }

    /// Resolve the board, filling unset dimensions from a fitted one
    pub fn board_within(&self, fitted: Board) -> Board {
        Board::new(
            self.grid_width.unwrap_or(fitted.width),
            self.grid_height.unwrap_or(fitted.height),
        )
    }

    pub fn validate(&self) -> Result<()> {
        for (field, side) in [("grid_width", self.grid_width), ("grid_height", self.grid_height)] {
            match side {
                Some(0) => return Err(anyhow!("{field} must be > 0")),
                Some(n) if n > MAX_SIDE => {
                    return Err(anyhow!("{field} must be at most {MAX_SIDE}, got {n}"));
                }
                _ => {}
            }
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.initial_speed) {
            return Err(anyhow!(
                "initial_speed must be between {MIN_SPEED} and {MAX_SPEED}, got {}",
                self.initial_speed
            ));
        }
        Color::from_str(&self.settings.color)
            .map_err(|_| anyhow!("color '{}' is not a recognised colour", self.settings.color))?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GameConfig::default()`.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GameConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
