//! Game configuration.
//!
//! Defaults are built in; an optional JSON file named by
//! `BEAT_THEM_ALL_CONFIG` replaces them, and a few environment variables
//! override single fields on top of that.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use combat::Pacing;
use error::{GameError, Result};
use map::DEFAULT_PLACEMENT_ATTEMPTS;
use serde::Deserialize;
use tracing::warn;

/// Environment variable pointing at a JSON configuration file
pub const CONFIG_ENV: &str = "BEAT_THEM_ALL_CONFIG";
pub const QUESTIONS_ENV: &str = "BEAT_THEM_ALL_QUESTIONS";
pub const SEED_ENV: &str = "BEAT_THEM_ALL_SEED";
/// Line delay in milliseconds; kill and turn delays follow at twice the value
pub const DELAY_ENV: &str = "BEAT_THEM_ALL_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pipe-delimited trivia file
    pub questions_path: PathBuf,
    pub line_delay_ms: u64,
    pub kill_delay_ms: u64,
    pub turn_delay_ms: u64,
    /// Fixed seed to replay a game; random when absent
    pub seed: Option<u64>,
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from("assets/questions.txt"),
            line_delay_ms: 500,
            kill_delay_ms: 1000,
            turn_delay_ms: 1000,
            seed: None,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Defaults without any delay (scripted runs and tests)
    pub fn instant() -> Self {
        Self {
            line_delay_ms: 0,
            kill_delay_ms: 0,
            turn_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Load configuration from the optional JSON file and the process
    /// environment.
    ///
    /// Environment variables:
    /// - `BEAT_THEM_ALL_CONFIG` - JSON file with any subset of the fields
    /// - `BEAT_THEM_ALL_QUESTIONS` - trivia file (default: assets/questions.txt)
    /// - `BEAT_THEM_ALL_SEED` - fixed RNG seed
    /// - `BEAT_THEM_ALL_DELAY_MS` - line delay, 0 disables every pause
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| GameError::Config(e.to_string()))?;
        if config.placement_attempts == 0 {
            return Err(GameError::Config(
                "placement_attempts must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Apply single-field overrides. Values that do not parse are logged and
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(QUESTIONS_ENV) {
            self.questions_path = PathBuf::from(path);
        }

        if let Some(seed) = read_value::<u64, _>(&lookup, SEED_ENV) {
            self.seed = Some(seed);
        }

        if let Some(delay) = read_value::<u64, _>(&lookup, DELAY_ENV) {
            self.line_delay_ms = delay;
            self.kill_delay_ms = delay.saturating_mul(2);
            self.turn_delay_ms = delay.saturating_mul(2);
        }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing::new(
            Duration::from_millis(self.line_delay_ms),
            Duration::from_millis(self.kill_delay_ms),
        )
    }

    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }
}

fn read_value<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
