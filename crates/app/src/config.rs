use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use drill_core::TopicId;
use services::PracticeSettings;

pub const DEFAULT_WINDOW_TITLE: &str = "Math Practice";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown topic in [start_levels]: {0}")]
    UnknownTopic(String),
}

/// Optional TOML settings file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window_title: String,
    pub rng_seed: Option<u64>,
    /// Topic slug to starting level.
    pub start_levels: BTreeMap<String, u8>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            rng_seed: None,
            start_levels: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Read `path`, or fall back to defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve slugs into practice settings. A `seed` from the command line wins
    /// over `rng_seed`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownTopic` for a slug that names no topic.
    pub fn practice_settings(&self, seed: Option<u64>) -> Result<PracticeSettings, ConfigError> {
        let start_levels = self
            .start_levels
            .iter()
            .map(|(slug, &level)| {
                slug.parse::<TopicId>()
                    .map(|topic| (topic, level))
                    .map_err(|_| ConfigError::UnknownTopic(slug.clone()))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(PracticeSettings {
            seed: seed.or(self.rng_seed),
            start_levels,
        })
    }
}
