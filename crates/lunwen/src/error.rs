use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the analysis core: configuration and input handling
#[derive(Error, Debug)]
pub enum LunwenError {
  #[error("Failed to read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid configuration in {path}: {source}")]
  InvalidConfig {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to serialize configuration: {0}")]
  Serialize(#[from] serde_json::Error),

  #[error("Unknown section '{name}' (configured: {known})")]
  UnknownSection { name: String, known: String },
}

impl LunwenError {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }
}

pub type Result<T> = std::result::Result<T, LunwenError>;
