use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use tracing::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{Board, GameEngine, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// How a player is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStyle {
    pub name: String,
    /// Terminal colour name (`red`, `lightblue`, ...) or `#rrggbb`.
    pub color: String,
}

impl PlayerStyle {
    fn new(name: &str, color: &str) -> Self {
        PlayerStyle {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    /// Parsed colour; falls back to white for strings `validate` would reject.
    pub fn color(&self) -> Color {
        Color::from_str(&self.color).unwrap_or(Color::White)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerStyle,
    pub two: PlayerStyle,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerStyle::new("Red", "red"),
            two: PlayerStyle::new("Blue", "blue"),
        }
    }
}

impl PlayersConfig {
    pub fn style(&self, player: Player) -> &PlayerStyle {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::new(self.board.height, self.board.width)?;

        for (key, style) in [("players.one", &self.players.one), ("players.two", &self.players.two)] {
            if style.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.name must not be empty"
                )));
            }
            if Color::from_str(&style.color).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{key}.color '{}' is not a known colour",
                    style.color
                )));
            }
        }

        if self.players.one.color() == self.players.two.color() {
            return Err(ConfigError::Validation(
                "players.one.color and players.two.color must differ".into(),
            ));
        }

        Ok(())
    }

    /// Fresh engine with the configured dimensions.
    pub fn new_engine(&self) -> Result<GameEngine, GameError> {
        GameEngine::new(self.board.height, self.board.width)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
