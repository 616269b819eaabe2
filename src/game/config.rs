use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::food::MAX_FOOD_ATTEMPTS;

/// Largest supported board side; keeps every snake length representable as a cell value
pub const MAX_BOARD_SIZE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Length of the snake laid down at the start of a game
    pub initial_snake_size: u32,
    /// Random probes per food placement before giving up
    pub max_food_attempts: usize,
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Number of past states the driver keeps (0 disables history)
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 30,
            initial_snake_size: 3,
            max_food_attempts: MAX_FOOD_ATTEMPTS,
            tick_interval_ms: 500,
            history_limit: 64,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing keys fall back to the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject settings the board encoding cannot represent
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "board_size must be between 1 and {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.initial_snake_size == 0 {
            return Err(GameError::InvalidConfig(
                "initial_snake_size must be at least 1".to_string(),
            ));
        }
        // The initial body runs leftward from the centre column.
        let room = self.board_size / 2 + 1;
        if self.initial_snake_size as usize > room {
            return Err(GameError::InvalidConfig(format!(
                "initial_snake_size {} does not fit left of centre on a {}x{} board (max {room})",
                self.initial_snake_size, self.board_size, self.board_size
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 30);
        assert_eq!(config.initial_snake_size, 3);
        assert_eq!(config.max_food_attempts, 5);
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15);
        assert_eq!(config.board_size, 15);
        assert_eq!(config.initial_snake_size, 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("board_size = 12\ntick_interval_ms = 100\n").unwrap();
        assert_eq!(config.board_size, 12);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.max_food_attempts, 5);
        assert_eq!(config.history_limit, 64);
    }

    #[test]
    fn test_malformed_toml() {
        let err = GameConfig::from_toml_str("board_size = \"big\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, GameError::ConfigIo { .. }));
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::new(0).validate().is_err());
        assert!(GameConfig::new(MAX_BOARD_SIZE + 1).validate().is_err());

        // 4 / 2 + 1 = 3 columns available left of and including the centre
        assert!(GameConfig::new(4).validate().is_ok());
        let crowded = GameConfig {
            initial_snake_size: 4,
            ..GameConfig::new(4)
        };
        assert!(crowded.validate().is_err());

        let frozen = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(frozen.validate().is_err());

        let headless = GameConfig {
            initial_snake_size: 0,
            ..Default::default()
        };
        assert!(headless.validate().is_err());
    }
}
