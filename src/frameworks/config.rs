use crate::domain::GameTuning;
use std::{env, fmt, path::Path, path::PathBuf, time::Duration};

// Runtime constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const NOTICE_BROADCAST_CAPACITY: usize = 128;

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Pacing of replayed motion samples (the platform sampler rate).
pub fn sample_interval() -> Duration {
    let millis = env_parse::<u64>("LANDING_SAMPLE_INTERVAL_MS").unwrap_or(16);
    Duration::from_millis(millis.max(1))
}

pub fn assets_dir() -> PathBuf {
    env::var("LANDING_ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets"))
}

pub fn trace_path() -> Option<PathBuf> {
    env::var("LANDING_TRACE").ok().map(PathBuf::from)
}

/// Fixed seed for reproducible spawns; random when unset.
pub fn rng_seed() -> Option<u64> {
    env_parse("LANDING_SEED")
}

pub fn tuning_path() -> Option<PathBuf> {
    env::var("LANDING_CONFIG").ok().map(PathBuf::from)
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            ConfigError::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn read_tuning_file(path: &Path) -> Result<GameTuning, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Defaults, then the optional TOML file, then screen size from the environment.
pub fn load_tuning() -> Result<GameTuning, ConfigError> {
    let mut tuning = match tuning_path() {
        Some(path) => read_tuning_file(&path)?,
        None => GameTuning::default(),
    };

    if let Some(width) = env_parse::<f64>("LANDING_SCREEN_WIDTH") {
        tuning.arena.screen_width = width;
    }
    if let Some(height) = env_parse::<f64>("LANDING_SCREEN_HEIGHT") {
        tuning.arena.screen_height = height;
    }

    tuning.validate().map_err(ConfigError::Invalid)?;
    Ok(tuning)
}
