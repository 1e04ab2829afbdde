//! Configuration file loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Environment variable overriding `time_limit_secs`.
pub const TIME_LIMIT_ENV: &str = "QUIZRUN_TIME_LIMIT";

/// Top-level quizrun configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// CSV file with `question,answer` rows.
    #[serde(default = "default_problems")]
    pub problems: PathBuf,
    /// Time limit for the whole quiz, in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
    /// Shuffle the questions once before starting.
    #[serde(default)]
    pub shuffle: bool,
}

fn default_problems() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_time_limit() -> u64 {
    10
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            problems: default_problems(),
            time_limit_secs: default_time_limit(),
            shuffle: false,
        }
    }
}

impl QuizConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }

    /// Parse a TOML config document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| QuizError::Config(e.to_string()))
    }
}

/// Load config from an explicit path, or search the well-known paths.
///
/// Search order when no path is given:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
///
/// `QUIZRUN_TIME_LIMIT` overrides the time limit from either file.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            return Err(QuizError::Config(format!(
                "config file not found: {}",
                p.display()
            )));
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("reading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| {
                QuizError::Config(format!("failed to read config {}: {e}", path.display()))
            })?;
            QuizConfig::from_toml_str(&content)?
        }
        None => QuizConfig::default(),
    };

    if let Ok(raw) = std::env::var(TIME_LIMIT_ENV) {
        config.time_limit_secs = parse_time_limit(&raw)?;
    }

    Ok(config)
}

fn parse_time_limit(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        QuizError::Config(format!(
            "{TIME_LIMIT_ENV} must be a whole number of seconds, got '{raw}'"
        ))
    })
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrun"))
}
