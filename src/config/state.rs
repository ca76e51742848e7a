// Application state module
// Read-only state shared by every connection

use std::path::Path;

use super::types::Config;
use crate::theses::{DatasetError, Theses};

/// Application state
///
/// Built once at startup and shared behind an `Arc`; nothing in it is
/// mutated afterwards, so handlers read it without locking.
pub struct AppState {
    pub config: Config,
    pub theses: Theses,
}

impl AppState {
    pub const fn new(config: Config, theses: Theses) -> Self {
        Self { config, theses }
    }

    /// Load the thesis collection named by the configuration and build state
    pub fn load(config: Config) -> Result<Self, DatasetError> {
        let fallback = config.content.default_language.as_str();
        let theses = match config.content.theses_file.as_deref() {
            Some(path) => Theses::from_file(Path::new(path), fallback)?,
            None => Theses::builtin(fallback)?,
        };
        Ok(Self::new(config, theses))
    }
}
