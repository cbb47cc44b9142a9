//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Loads and saves user settings as TOML from the platform config directory
//! using the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load(None).await?;
//! config.save().await?;
//! ```

use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs as TokioFs;
use tracing::{Level, info};

use crate::error::AppError;

/// Color scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Terminal default colors; selection drawn reversed.
    #[default]
    Terminal,

    /// Catppuccin Mocha palette.
    Mocha,
}

/// Keyboard preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Keymap {
    #[default]
    Standard,

    Vim,
}

/// What the tree builder does with a subdirectory it cannot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnreadableDirs {
    /// Keep the directory as a permanently empty node.
    #[default]
    Empty,

    /// Leave the directory out of the tree.
    Omit,
}

/// Log verbosity, shared by the config file and `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<Level> {
        match self {
            Self::Debug => Some(Level::DEBUG),
            Self::Info => Some(Level::INFO),
            Self::Warn => Some(Level::WARN),
            Self::Error => Some(Level::ERROR),
            Self::Silent => None,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,

    pub keymap: Keymap,

    /// Include entries whose name starts with a dot.
    pub show_hidden: bool,

    /// Start with the root directory expanded.
    pub expand_root: bool,

    /// Columns of indentation per tree level.
    pub indent_width: u16,

    pub unreadable_dirs: UnreadableDirs,

    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Terminal,
            keymap: Keymap::Standard,
            show_hidden: true,
            expand_root: true,
            indent_width: 2,
            unreadable_dirs: UnreadableDirs::Empty,
            log_level: LogLevel::Warn,
        }
    }
}

impl Config {
    /// Loads config from an explicit file, or from the platform config dir.
    ///
    /// An explicit path must exist. The default file is created with default
    /// values the first time it is looked up.
    pub async fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            info!("Loading config from {}", path.display());
            return Self::read_from(path).await;
        }

        let path = Self::config_path()?;
        if TokioFs::try_exists(&path)
            .await
            .map_err(|e| AppError::config_io(&path, e))?
        {
            info!("Loading config from {}", path.display());
            Self::read_from(&path).await
        } else {
            info!(
                "No config file found at {}, creating it with defaults",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(text)?)
    }

    async fn read_from(path: &Path) -> Result<Self, AppError> {
        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|e| AppError::config_io(path, e))?;

        Self::from_toml(&text)
    }

    /// Saves config to the platform config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(&path, toml_str)
            .await
            .map_err(|e| AppError::config_io(&path, e))?;

        Ok(())
    }

    /// The canonical config file path.
    pub fn config_path() -> Result<PathBuf, AppError> {
        Ok(project_dirs("config")?.config_dir().join("config.toml"))
    }

    /// Directory holding the rolling log files.
    pub fn log_dir() -> Result<PathBuf, AppError> {
        Ok(project_dirs("data")?.data_local_dir().join("logs"))
    }
}

fn project_dirs(kind: &'static str) -> Result<ProjectDirs, AppError> {
    ProjectDirs::from("org", "treepick", "treepick").ok_or(AppError::ConfigDir(kind))
}
