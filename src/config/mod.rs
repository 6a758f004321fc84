use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the record file created at the repository root
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// chrono format used by `list`
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Number of hash characters shown by `list` (0 = full hash)
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,
}

fn default_file_name() -> String {
    ".timecard".to_string()
}
fn default_time_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
fn default_hash_length() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            time_format: default_time_format(),
            hash_length: default_hash_length(),
        }
    }
}

impl Config {
    /// Platform configuration directory, e.g. `~/.config/timecard`
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timecard")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = self.to_yaml()?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Record file location for the repository rooted at `repo_dir`.
    pub fn timecard_path(&self, repo_dir: &Path) -> PathBuf {
        repo_dir.join(&self.file_name)
    }
}
