use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the game core and its configuration
#[derive(Debug, Error)]
pub enum GameError {
    /// No free cell is left for the apple.
    #[error("board is full: {occupied} of {cells} cells occupied")]
    BoardFull { occupied: usize, cells: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
