use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::conversation::DEFAULT_REPLY_DELAY;
use crate::seed;

const REPLY_DELAY_ENV: &str = "SNAPFIT_REPLY_DELAY_MS";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Simulated assistant latency in milliseconds
    pub reply_delay_ms: Option<u64>,
    /// Workout document to load instead of the built-in plan
    pub workouts_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    /// Reply delay: env var first, then config, then the built-in default
    pub fn reply_delay(&self) -> Duration {
        std::env::var(REPLY_DELAY_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .or(self.reply_delay_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REPLY_DELAY)
    }

    /// Raw workout document: the configured file if readable, else the
    /// built-in plan
    pub fn workout_document(&self) -> String {
        match &self.workouts_path {
            Some(path) => fs::read_to_string(path).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "workout document unreadable, using built-in plan"
                );
                seed::WORKOUT_DOCUMENT.to_string()
            }),
            None => seed::WORKOUT_DOCUMENT.to_string(),
        }
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("snapfit").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            reply_delay_ms: Some(250),
            workouts_path: Some(PathBuf::from("/tmp/plan.json")),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_default_config_written_then_reloaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapfit").join("config.json");
        assert!(!path.exists());

        Config::new().save_to(&path).unwrap();
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, Config::new());
        assert_eq!(reloaded.reply_delay(), Config::new().reply_delay());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_workout_document_falls_back_to_seed() {
        let config = Config {
            reply_delay_ms: None,
            workouts_path: Some(PathBuf::from("/definitely/not/here.json")),
        };
        assert_eq!(config.workout_document(), seed::WORKOUT_DOCUMENT);
    }

    #[test]
    fn test_workout_document_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, r#"{"workouts": []}"#).unwrap();
        let config = Config {
            reply_delay_ms: None,
            workouts_path: Some(path),
        };
        assert_eq!(config.workout_document(), r#"{"workouts": []}"#);
    }
}
