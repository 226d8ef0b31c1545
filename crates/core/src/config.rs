use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONNECT_DELAY_MS: u64 = 1_200;
const DEFAULT_SCHEMA_DELAY_MS: u64 = 300;
const DEFAULT_QUERY_DELAY_MS: u64 = 400;
const DEFAULT_FAILURE_PROBABILITY: f64 = 0.05;
const DEFAULT_ROW_CAP: usize = 100;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("config directory is unavailable for this platform")]
    ConfigDirUnavailable,
    #[error("failed to read settings file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failure probability {0} is outside the range 0.0..=1.0")]
    InvalidFailureProbability(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub connect_delay_ms: u64,
    pub schema_delay_ms: u64,
    pub query_delay_ms: u64,
    pub failure_probability: f64,
    pub synthesized_row_cap: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            connect_delay_ms: DEFAULT_CONNECT_DELAY_MS,
            schema_delay_ms: DEFAULT_SCHEMA_DELAY_MS,
            query_delay_ms: DEFAULT_QUERY_DELAY_MS,
            failure_probability: DEFAULT_FAILURE_PROBABILITY,
            synthesized_row_cap: DEFAULT_ROW_CAP,
        }
    }
}

impl SimulationSettings {
    // Zero latency and no injected failures; the row cap keeps its default.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            connect_delay_ms: 0,
            schema_delay_ms: 0,
            query_delay_ms: 0,
            failure_probability: 0.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    #[must_use]
    pub fn schema_delay(&self) -> Duration {
        Duration::from_millis(self.schema_delay_ms)
    }

    #[must_use]
    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.failure_probability) {
            return Err(SettingsError::InvalidFailureProbability(
                self.failure_probability,
            ));
        }
        Ok(())
    }

    pub fn load_default() -> Result<Self, SettingsError> {
        Self::load_from_path(default_settings_path()?)
    }

    pub fn load_from_path(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let settings: Self = toml::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.clone(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }
}

pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    let base_dir = if let Some(custom) = env::var_os("MIRAGE_CONFIG_DIR") {
        PathBuf::from(custom)
    } else if cfg!(target_os = "windows") {
        env::var_os("APPDATA")
            .map(PathBuf::from)
            .ok_or(SettingsError::ConfigDirUnavailable)?
    } else if let Some(xdg_config_home) = env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config_home)
    } else {
        let home = env::var_os("HOME").ok_or(SettingsError::ConfigDirUnavailable)?;
        PathBuf::from(home).join(".config")
    };

    Ok(base_dir.join("mirage").join("simulation.toml"))
}
