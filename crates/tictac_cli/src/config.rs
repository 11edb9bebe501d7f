//! Play configuration loaded from TOML and merged with CLI flags.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::{Difficulty, EngineError, GameMode, Opponent, Player};
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Human vs human, or human vs automated.
    #[serde(default)]
    mode: GameMode,

    /// Automated opponent strength.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Mark the automated opponent plays ("X" or "O").
    #[serde(default = "default_automated_mark")]
    automated_mark: Player,

    /// Pause before each automated reply.
    #[serde(default = "default_reply_delay_ms")]
    reply_delay_ms: u64,

    /// Seed for the easy and medium policies.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_automated_mark() -> Player {
    Player::O
}

fn default_reply_delay_ms() -> u64 {
    700
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: None,
            automated_mark: default_automated_mark(),
            reply_delay_ms: default_reply_delay_ms(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = ?config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    ///
    /// Passing a difficulty on its own implies automated mode.
    #[instrument(skip(self))]
    pub fn merge(mut self, args: &PlayArgs) -> Self {
        if let Some(difficulty) = args.difficulty {
            self.difficulty = Some(difficulty);
            if args.mode.is_none() {
                self.mode = GameMode::Automated;
            }
        }
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if let Some(mark) = args.automated_mark {
            self.automated_mark = mark;
        }
        if let Some(delay) = args.delay_ms {
            self.reply_delay_ms = delay;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        self
    }

    /// Resolves the opponent for a new session.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingDifficulty`] for automated mode without a difficulty.
    pub fn opponent(&self) -> Result<Opponent, EngineError> {
        match Opponent::from_mode(self.mode, self.difficulty)? {
            Opponent::Automated { difficulty, .. } => Ok(Opponent::Automated {
                difficulty,
                mark: self.automated_mark,
            }),
            Opponent::Human => Ok(Opponent::Human),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(config.mode(), &GameMode::Human);
        assert_eq!(config.automated_mark(), &Player::O);
        assert_eq!(config.reply_delay_ms(), &700);
        assert_eq!(config.opponent(), Ok(Opponent::Human));
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"
            mode = "automated"
            difficulty = "medium"
            reply_delay_ms = 0
            seed = 42
            "#,
        );
        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(config.mode(), &GameMode::Automated);
        assert_eq!(config.difficulty(), &Some(Difficulty::Medium));
        assert_eq!(config.reply_delay_ms(), &0);
        assert_eq!(config.seed(), &Some(42));
        assert_eq!(
            config.opponent(),
            Ok(Opponent::Automated {
                difficulty: Difficulty::Medium,
                mark: Player::O,
            })
        );
    }

    #[test]
    fn test_automated_without_difficulty() {
        let file = write_config("mode = \"automated\"\n");
        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(config.opponent(), Err(EngineError::MissingDifficulty));
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let file = write_config("difficulty = \"nightmare\"\n");
        let err = PlayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlayConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_difficulty_flag_implies_automated() {
        let args = PlayArgs {
            difficulty: Some(Difficulty::Impossible),
            automated_mark: Some(Player::X),
            delay_ms: Some(0),
            ..PlayArgs::default()
        };
        let config = PlayConfig::default().merge(&args);
        assert_eq!(
            config.opponent(),
            Ok(Opponent::Automated {
                difficulty: Difficulty::Impossible,
                mark: Player::X,
            })
        );
        assert_eq!(config.reply_delay_ms(), &0);
    }

    #[test]
    fn test_explicit_mode_wins_over_difficulty() {
        let args = PlayArgs {
            mode: Some(GameMode::Human),
            difficulty: Some(Difficulty::Easy),
            ..PlayArgs::default()
        };
        let config = PlayConfig::default().merge(&args);
        assert_eq!(config.opponent(), Ok(Opponent::Human));
    }
}
