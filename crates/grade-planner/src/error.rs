use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced when loading a scoring model from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read model {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse model {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("invalid model in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// A scoring-model invariant that does not hold.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

impl ValidationError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidField { field: field.into(), message: message.into() }
    }
}

/// Raw input outside the domain the input layer accepts.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: f64, max: f64, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}
