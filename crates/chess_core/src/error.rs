//! Error types for the parts of the core that touch untrusted input.
//!
//! The search itself has no recoverable failures; these cover FEN and move
//! parsing at the rules-engine edge and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid FEN '{fen}': {reason}")]
    Fen { fen: String, reason: String },
    #[error("illegal move '{mv}' in position {fen}")]
    IllegalMove { mv: String, fen: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
