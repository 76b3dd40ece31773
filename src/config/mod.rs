use crate::errors::{AppError, AppResult};
use crate::models::{RowMetrics, ViewMode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment variable overriding the configuration directory.
pub const HOME_ENV_VAR: &str = "RCALSPAN_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Events source file (.json, .yaml, .yml, .csv)
    #[serde(default = "default_events_file")]
    pub events_file: String,
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_base_row_height")]
    pub base_row_height: u32,
    #[serde(default = "default_lane_height")]
    pub lane_height: u32,
    #[serde(default = "default_max_visible_lanes")]
    pub max_visible_lanes: usize,
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_events_file() -> String {
    Config::config_dir()
        .join("events.json")
        .to_string_lossy()
        .to_string()
}
fn default_base_row_height() -> u32 {
    120
}
fn default_lane_height() -> u32 {
    36
}
fn default_max_visible_lanes() -> usize {
    4
}
fn default_cell_width() -> usize {
    14
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: default_events_file(),
            default_view: ViewMode::default(),
            base_row_height: default_base_row_height(),
            lane_height: default_lane_height(),
            max_visible_lanes: default_max_visible_lanes(),
            cell_width: default_cell_width(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`$RCALSPAN_HOME` or `~/.rcalspan`)
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV_VAR)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rcalspan")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcalspan.conf")
    }

    /// Load configuration from `path` (or the default file), falling back
    /// to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.cell_width < 4 {
            return Err(AppError::Config(format!(
                "cell_width must be at least 4 (got {})",
                self.cell_width
            )));
        }
        if self.max_visible_lanes == 0 {
            return Err(AppError::Config(
                "max_visible_lanes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Write a default configuration file at `path` (or the default location).
    /// In test mode nothing is written.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if is_test {
            return Ok(path);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        Self::default().save(&path)?;
        Ok(path)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn metrics(&self) -> RowMetrics {
        RowMetrics {
            base_row_height: self.base_row_height,
            lane_height: self.lane_height,
            max_visible_lanes: self.max_visible_lanes,
        }
    }
}
