//! Game settings: defaults, TOML file, command-line overrides.

use crate::cli::Cli;
use bridgeit_engine::{Game, GameError, PlayerType};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest recommended board dimension.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest recommended board dimension.
pub const MAX_BOARD_SIZE: usize = 20;

/// True if both dimensions are within the recommended 3..=20 range.
pub fn validate_board_size(rows: usize, cols: usize) -> bool {
    let range = MIN_BOARD_SIZE..=MAX_BOARD_SIZE;
    range.contains(&rows) && range.contains(&cols)
}

/// Name and color label for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerSettings {
    /// Display name.
    name: String,
    /// Color label.
    color: String,
}

impl PlayerSettings {
    /// Creates seat settings.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Everything needed to set up a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSettings {
    /// Number of node rows.
    rows: usize,
    /// Number of node columns.
    cols: usize,
    /// Seat one (top to bottom).
    player1: PlayerSettings,
    /// Seat two (left to right).
    player2: PlayerSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            player1: PlayerSettings::new("Player 1", "Red"),
            player2: PlayerSettings::new("Player 2", "Blue"),
        }
    }
}

/// On-disk form; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    rows: Option<usize>,
    cols: Option<usize>,
    player1: SeatFile,
    player2: SeatFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SeatFile {
    name: Option<String>,
    color: Option<String>,
}

impl SeatFile {
    fn apply(self, seat: &mut PlayerSettings) {
        if let Some(name) = self.name {
            seat.name = name;
        }
        if let Some(color) = self.color {
            seat.color = color;
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file; missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text; missing keys keep their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        let mut settings = Self::default();
        if let Some(rows) = file.rows {
            settings.rows = rows;
        }
        if let Some(cols) = file.cols {
            settings.cols = cols;
        }
        file.player1.apply(&mut settings.player1);
        file.player2.apply(&mut settings.player2);
        Ok(settings)
    }

    /// Resolves defaults, the optional settings file and command-line
    /// flags (in increasing priority), then validates the result.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_overrides(cli);
        settings.validate()?;
        info!(rows = settings.rows, cols = settings.cols, "Settings resolved");
        Ok(settings)
    }

    /// Applies any values given on the command line.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(rows) = cli.rows {
            self.rows = rows;
        }
        if let Some(cols) = cli.cols {
            self.cols = cols;
        }
        if let Some(name) = &cli.player1 {
            self.player1.name = name.clone();
        }
        if let Some(name) = &cli.player2 {
            self.player2.name = name.clone();
        }
    }

    /// Returns a copy with a different board size.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Returns a copy with different player names.
    #[must_use]
    pub fn with_names(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player1.name = player1.into();
        self.player2.name = player2.into();
        self
    }

    /// Checks the recommended board-size bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if validate_board_size(self.rows, self.cols) {
            Ok(())
        } else {
            Err(ConfigError::new(format!(
                "Board size must be between {min}x{min} and {max}x{max}, got {}x{}",
                self.rows,
                self.cols,
                min = MIN_BOARD_SIZE,
                max = MAX_BOARD_SIZE,
            )))
        }
    }

    /// Builds a game with both players registered and started.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> Result<Game, GameError> {
        let mut game = Game::new(self.rows, self.cols);
        game.add_player(&self.player1.name, &self.player1.color, PlayerType::Human)?;
        game.add_player(&self.player2.name, &self.player2.color, PlayerType::Human)?;
        game.start_game()?;
        Ok(game)
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
