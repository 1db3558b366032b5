//! Crate error type.

use std::path::PathBuf;

/// Errors raised outside the calculator core.
///
/// Arithmetic faults are not errors; they show up as the error token.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("{0}")]
    Clipboard(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
