//! Game configuration: board size and win length.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::board::{BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Stones in a row needed to win by default
pub const WIN_LENGTH: usize = 5;
/// Shortest accepted winning line
pub const MIN_WIN_LENGTH: usize = 3;

/// Configuration loading and validation failures.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[display("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML for [`GameConfig`].
    #[display("failed to parse config: {source}")]
    Parse { source: toml::de::Error },
    /// Board size outside the supported range.
    #[display("board size {size} is out of range ({}..={})", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    BoardSize { size: usize },
    /// Win length shorter than the minimum or longer than the board.
    #[display("win length {win_length} is out of range ({}..={board_size})", MIN_WIN_LENGTH)]
    WinLength { win_length: usize, board_size: usize },
}

/// Board dimensions and win condition. Fixed for the lifetime of a game.
///
/// Always within the supported ranges: the only ways to get one are
/// [`GameConfig::new`], the TOML loaders and [`Default`], all of which
/// validate. Fields are read through accessors.
///
/// ```compile_fail
/// let config = gomoku::GameConfig { board_size: 40, win_length: 5 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    board_size: usize,
    win_length: usize,
}

/// Config as written in the file, before validation
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    board_size: usize,
    win_length: usize,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            win_length: WIN_LENGTH,
        }
    }
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.board_size, raw.win_length)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            win_length: WIN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Validated config
    pub fn new(board_size: usize, win_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            win_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Grid dimension (the board is `board_size` x `board_size`)
    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Consecutive stones required to win
    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
            });
        }
        if !(MIN_WIN_LENGTH..=self.board_size).contains(&self.win_length) {
            return Err(ConfigError::WinLength {
                win_length: self.win_length,
                board_size: self.board_size,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text).map_err(|source| ConfigError::Parse { source })?;
        raw.try_into()
    }

    /// Read and validate a TOML config file
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(?config, "Loaded game config");
        Ok(config)
    }

    /// Apply command-line overrides, then re-validate
    pub fn with_overrides(
        self,
        board_size: Option<usize>,
        win_length: Option<usize>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            board_size.unwrap_or(self.board_size),
            win_length.unwrap_or(self.win_length),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size(), 15);
        assert_eq!(config.win_length(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full() {
        let config = GameConfig::from_toml_str("board_size = 19\nwin_length = 6\n").unwrap();
        assert_eq!(config, GameConfig { board_size: 19, win_length: 6 });
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = GameConfig::from_toml_str("board_size = 9").unwrap();
        assert_eq!(config.board_size(), 9);
        assert_eq!(config.win_length(), WIN_LENGTH);

        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = GameConfig::from_toml_str("board = 15").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_board_size_range() {
        assert!(matches!(
            GameConfig::new(4, 3),
            Err(ConfigError::BoardSize { size: 4 })
        ));
        assert!(matches!(
            GameConfig::new(27, 5),
            Err(ConfigError::BoardSize { size: 27 })
        ));
        assert!(GameConfig::new(26, 5).is_ok());
        assert!(GameConfig::new(5, 5).is_ok());
    }

    #[test]
    fn test_win_length_range() {
        assert!(matches!(
            GameConfig::new(15, 2),
            Err(ConfigError::WinLength { win_length: 2, .. })
        ));
        assert!(matches!(
            GameConfig::new(7, 8),
            Err(ConfigError::WinLength { win_length: 8, board_size: 7 })
        ));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(Some(19), None).unwrap();
        assert_eq!(config, GameConfig { board_size: 19, win_length: 5 });
        assert!(GameConfig::default().with_overrides(None, Some(20)).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = GameConfig::new(30, 5).unwrap_err();
        assert_eq!(err.to_string(), "board size 30 is out of range (5..=26)");
        let err = GameConfig::new(15, 16).unwrap_err();
        assert_eq!(err.to_string(), "win length 16 is out of range (3..=15)");
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        assert!(matches!(
            GameConfig::from_toml_str("board_size = 40"),
            Err(ConfigError::BoardSize { size: 40 })
        ));
        assert!(matches!(
            GameConfig::from_toml_str("win_length = 1"),
            Err(ConfigError::WinLength { win_length: 1, .. })
        ));
        assert!(matches!(
            GameConfig::from_toml_str("win_length = 0"),
            Err(ConfigError::WinLength { win_length: 0, .. })
        ));
    }

    #[test]
    fn test_direct_deserialize_validates() {
        let result: Result<GameConfig, _> = toml::from_str("board_size = 40");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("board size 40 is out of range"), "{err}");

        let config: GameConfig = toml::from_str("board_size = 9\nwin_length = 4").unwrap();
        assert_eq!((config.board_size(), config.win_length()), (9, 4));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/gomoku.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
