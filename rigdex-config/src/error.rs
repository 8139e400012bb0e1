use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading engine settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid environment override {variable}: {message}")]
    EnvOverride { variable: String, message: String },
}

pub type Result<T> = std::result::Result<T, SettingsError>;
