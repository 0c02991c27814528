//! Host settings read from the environment

use std::path::PathBuf;

use game_core::{Config, ConfigError, Variant};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "PONG_CONFIG";
pub const VARIANT_ENV_VAR: &str = "PONG_VARIANT";
pub const SEED_ENV_VAR: &str = "PONG_SEED";
pub const TICKS_ENV_VAR: &str = "PONG_TICKS";
pub const SNAPSHOT_ENV_VAR: &str = "PONG_SNAPSHOT_EVERY";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unknown variant {0:?}, expected \"table\" or \"flat\"")]
    UnknownVariant(String),
    #[error("{name} must be a non-negative integer, got {value:?}")]
    BadNumber { name: &'static str, value: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct HostSettings {
    pub config: Config,
    pub seed: u64,
    pub ticks: u64,
    /// Log a JSON render snapshot every N ticks (0 disables)
    pub snapshot_every: u64,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            config: Config::table(),
            seed: 42,
            ticks: 3600,
            snapshot_every: 300,
        }
    }
}

impl HostSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable source; the config file wins over the variant name
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if let Some(name) = lookup(VARIANT_ENV_VAR) {
            let variant =
                Variant::from_name(&name).ok_or_else(|| SettingsError::UnknownVariant(name))?;
            settings.config = Config::for_variant(variant);
        }

        if let Some(path) = lookup(CONFIG_ENV_VAR).map(PathBuf::from) {
            let text = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
                path: path.clone(),
                source,
            })?;
            settings.config = serde_json::from_str(&text)
                .map_err(|source| SettingsError::Parse { path, source })?;
        }

        if let Some(seed) = parse_number(&lookup, SEED_ENV_VAR)? {
            settings.seed = seed;
        }
        if let Some(ticks) = parse_number(&lookup, TICKS_ENV_VAR)? {
            settings.ticks = ticks;
        }
        if let Some(every) = parse_number(&lookup, SNAPSHOT_ENV_VAR)? {
            settings.snapshot_every = every;
        }

        settings.config.validate()?;
        Ok(settings)
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<u64>, SettingsError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::BadNumber { name, value }),
    }
}
