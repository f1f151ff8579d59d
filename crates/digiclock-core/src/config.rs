use std::{
    fs,
    path::{Path, PathBuf},
};

pub use digiclock_proto::config::*;

use digiclock_proto::config::{Config, ConfigValidationError, DEFAULT_CONFIG_FILE_PATH};
use log::{info, warn};
use masterror::Error;
use shellexpand::full;

/// Failures while locating or decoding the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to expand config path {path:?}: {context}")]
    Expand { path: String, context: String },
    #[error("config file does not exist: {path:?}")]
    NotFound { path: PathBuf },
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

/// Resolve and load the configuration.
///
/// An explicit `path` must exist. Without one the default location is used
/// and a missing or broken file falls back to [`Config::default`].
///
/// # Errors
///
/// Returns [`ConfigError::Expand`] if the path cannot be shell-expanded and
/// [`ConfigError::NotFound`] if an explicit path does not exist.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigError> {
    match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path)?;

            if !expanded.exists() {
                return Err(ConfigError::NotFound { path: expanded });
            }

            Ok((load_or_default(&expanded), expanded))
        }
        None => {
            let expanded = expand_path(Path::new(DEFAULT_CONFIG_FILE_PATH))?;

            if !expanded.exists() {
                info!("No config at {expanded:?}, using defaults");
                return Ok((Config::default(), expanded));
            }

            Ok((load_or_default(&expanded), expanded))
        }
    }
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|err| ConfigError::Expand {
        path:    str_path.to_string(),
        context: err.to_string(),
    })?;

    Ok(PathBuf::from(expanded.as_ref()))
}

fn load_or_default(path: &Path) -> Config {
    read_config(path).unwrap_or_else(|err| {
        warn!("{err}, falling back to defaults");
        Config::default()
    })
}

/// Read, decode and validate the file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`], [`ConfigError::Parse`] or
/// [`ConfigError::Validation`].
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Decoding config file {path:?}");

    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    info!("Config file loaded successfully");
    Ok(config)
}
