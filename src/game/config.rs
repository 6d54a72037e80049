use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use super::{error::GameError, grid::GridModel};

/// Configuration for a game session, fixed once the session starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playing field in pixels
    pub screen_width: u32,
    /// Height of the playing field in pixels
    pub screen_height: u32,
    /// Side of one square cell in pixels
    pub cell_size: u32,
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Random samples tried before apple placement scans for free cells
    pub max_placement_attempts: u32,
    /// Seed for reproducible sessions; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            ticks_per_second: 20,
            max_placement_attempts: 1024,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with custom pixel dimensions
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, GameError> {
        let raw = fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Derive the grid in cells, rejecting configurations without a playable cell
    pub fn grid(&self) -> Result<GridModel, GameError> {
        if self.cell_size == 0 {
            return Err(GameError::InvalidConfig("cell size must be positive".into()));
        }
        let width = self.screen_width / self.cell_size;
        let height = self.screen_height / self.cell_size;
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "{}x{} px holds no {} px cell",
                self.screen_width, self.screen_height, self.cell_size
            )));
        }
        Ok(GridModel::new(width, height))
    }

    pub fn tick_interval(&self) -> Result<Duration, GameError> {
        if self.ticks_per_second == 0 {
            return Err(GameError::InvalidConfig(
                "tick rate must be positive".into(),
            ));
        }
        Ok(Duration::from_secs(1) / self.ticks_per_second)
    }
}
