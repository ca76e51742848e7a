//! Dataset loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the thesis collection.
///
/// All of them are fatal at startup; once a `Theses` value exists no
/// further dataset errors can happen.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read thesis file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse thesis file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("thesis collection contains no languages")]
    Empty,

    #[error("default language '{0}' is not present in the thesis collection")]
    MissingDefault(String),

    #[error("default language '{0}' has no theses")]
    EmptyDefault(String),

    #[error("invalid language code '{0}': expected two ASCII letters")]
    InvalidLanguageCode(String),
}
