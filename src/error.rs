use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Misuse of the engine API. Gameplay outcomes such as hitting a wall are
/// reported through [`crate::engine::TickResult`], never through this type.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum EngineError {
    #[error("grid size {size} is too small, need at least {min}")]
    GridTooSmall { size: u16, min: u16 },
    #[error("initial snake length {length} is shorter than {min}")]
    InitialLengthTooShort { length: usize, min: usize },
    #[error("initial snake length {length} exceeds {max}")]
    InitialLengthTooLong { length: usize, max: usize },
    #[error("invalid speed curve: {0}")]
    InvalidSpeedCurve(&'static str),
    #[error("invalid board layout: {0}")]
    InvalidLayout(&'static str),
    #[error("the game is over; reset before changing the board")]
    GameOver,
}

/// Failure to load an [`crate::config::EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] EngineError),
}
