//! Application settings: built-in defaults with an optional YAML override file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::domain::{BOARD_SIZE, Board, STARTING_POSITION};
use crate::error::BoardError;
use crate::models::BoardLayout;

/// Environment variable naming a YAML config file
pub const CONFIG_ENV_VAR: &str = "FEN_BOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Side of one square in pixels
    pub square_size: u32,
    /// FEN board field of the initial position
    pub position: String,
    /// Directory holding the piece sprites
    pub asset_dir: PathBuf,
    /// Only let the side to move pick up pieces, alternating after each move
    pub enforce_turns: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Chessboard".into(),
            window_width: 540,
            window_height: 540,
            square_size: 540 / BOARD_SIZE as u32,
            position: STARTING_POSITION.into(),
            asset_dir: PathBuf::from("assets"),
            enforce_turns: false,
        }
    }
}

impl Config {
    /// Load from the file named by `FEN_BOARD_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse YAML; keys left out keep their default values
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.square_size > 0, "square_size must be positive");
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be positive"
        );
        self.board().context("invalid start position")?;
        Ok(())
    }

    pub fn board(&self) -> Result<Board, BoardError> {
        Board::parse(&self.position)
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.square_size)
    }
}
