//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end and the multiplayer glue both drive it through [`GameEngine`].

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, DirectionInput};
pub use config::{GameConfig, FOOD_BONUS, MAX_GRID_CELLS};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use error::GameError;
pub use grid::{Cell, Grid};
pub use state::{CollisionType, GrowthQueue, SnakeState};
