use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// A winning run needs four cells, so boards below 4x4 make the game
/// unwinnable; the upper bound keeps the board renderable in a terminal.
pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 32;

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.height < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_DIMENSION}"
            )));
        }
        Ok(())
    }
}
