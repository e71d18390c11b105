use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{GameError, Result};

pub const CELLS_WIDE: usize = 20;
pub const CELLS_HIGH: usize = 20;
pub const FOOD_BONUS: u64 = 10_000;
/// Largest grid accepted, 1024x1024
pub const MAX_GRID_CELLS: usize = 1024 * 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Seconds between two movement ticks
    pub time_step: f32,
    /// World size the grid is stretched over when drawing
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: CELLS_WIDE,
            grid_height: CELLS_HIGH,
            time_step: 0.15,
            world_width: 400.0,
            world_height: 400.0,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(5, 5)
    }

    /// Load a JSON config file; missing fields fall back to defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// The grid must fit the snake plus one food cell, otherwise food placement
    /// could never succeed.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.grid_width, self.grid_height);
        match width.checked_mul(height) {
            Some(cells) if cells < 2 => return Err(GameError::GridTooSmall { width, height }),
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(GameError::GridTooLarge {
                    width,
                    height,
                    max: MAX_GRID_CELLS,
                })
            }
        }
        if self.time_step.is_nan() || self.time_step <= 0.0 {
            return Err(GameError::InvalidTimeStep(self.time_step));
        }
        if self.world_width.is_nan()
            || self.world_height.is_nan()
            || self.world_width <= 0.0
            || self.world_height <= 0.0
        {
            return Err(GameError::InvalidWorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }
        Ok(())
    }

    /// Size of one cell in world units
    pub fn cell_size(&self) -> (f32, f32) {
        (
            self.world_width / self.grid_width as f32,
            self.world_height / self.grid_height as f32,
        )
    }
}
