use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::difficulty::Difficulty;
use crate::data::doctrines::Doctrine;
use crate::data::eras::Era;

/// Startup parameters for an economy host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub era: Era,
    /// Overrides the era's own doctrine for compulsory deliveries.
    #[serde(default)]
    pub doctrine: Option<Doctrine>,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_ticks_per_month")]
    pub ticks_per_month: u64,
}

fn default_start_year() -> i32 {
    1917
}

fn default_ticks_per_month() -> u64 {
    30
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            difficulty: Difficulty::default(),
            era: Era::default(),
            doctrine: None,
            start_year: default_start_year(),
            ticks_per_month: default_ticks_per_month(),
        }
    }
}

#[derive(Debug)]
pub enum EconomyConfigError {
    Io { path: String, source: std::io::Error },
    Json { path: String, source: serde_json::Error },
    Validation(String),
}

impl std::fmt::Display for EconomyConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EconomyConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            EconomyConfigError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
            EconomyConfigError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for EconomyConfigError {}

pub fn load_economy_config(path: impl AsRef<Path>) -> Result<EconomyConfig, EconomyConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| EconomyConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: EconomyConfig =
        serde_json::from_str(&raw).map_err(|source| EconomyConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

impl EconomyConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, EconomyConfigError> {
        let config: EconomyConfig =
            serde_json::from_str(raw).map_err(|source| EconomyConfigError::Json {
                path: "<inline>".to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EconomyConfigError> {
        if self.ticks_per_month == 0 {
            return Err(EconomyConfigError::Validation(
                "ticks_per_month must be positive".to_string(),
            ));
        }
        if !(1900..=2100).contains(&self.start_year) {
            return Err(EconomyConfigError::Validation(format!(
                "start_year {} outside 1900..=2100",
                self.start_year
            )));
        }
        Ok(())
    }

    pub fn effective_doctrine(&self) -> Doctrine {
        self.doctrine.unwrap_or_else(|| self.era.doctrine())
    }
}
