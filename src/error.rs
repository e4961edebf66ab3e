use std::path::PathBuf;

/// Errors raised when setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board {height}x{width} is too small: both dimensions must be at least {min}")]
    BoardTooSmall {
        height: usize,
        width: usize,
        min: usize,
    },

    #[error("board {height}x{width} is too large: both dimensions must be at most {max}")]
    BoardTooLarge {
        height: usize,
        width: usize,
        max: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board: {0}")]
    Game(#[from] GameError),
}
