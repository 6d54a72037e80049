//! Core game logic for Snake on a wrap-around grid
//!
//! This module contains the grid, the snake, apple placement and the per-tick
//! controller, without any I/O or rendering dependencies.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use apple::{Apple, ApplePlacer};
pub use config::GameConfig;
pub use engine::{RoundController, Scene, TickEvent, TickOutcome};
pub use error::GameError;
pub use grid::{Cell, GridModel};
pub use snake::{OccupiesCells, SnakeState};
