// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use std::net::SocketAddr;
use thiserror::Error;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix for environment overrides, e.g. `CLUETRAIN_SERVER__PORT=9000`
const ENV_PREFIX: &str = "CLUETRAIN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "cluetrain")?
            .set_default("http.not_found_status", 200)?
            .set_default("http.redirect_status", 302)?
            .set_default("content.default_language", "en")?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the handlers cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.http.not_found_status, 200 | 404) {
            return Err(ConfigError::Invalid(format!(
                "http.not_found_status must be 200 or 404, got {}",
                self.http.not_found_status
            )));
        }
        if !matches!(self.http.redirect_status, 302 | 303) {
            return Err(ConfigError::Invalid(format!(
                "http.redirect_status must be 302 or 303, got {}",
                self.http.redirect_status
            )));
        }
        if self.server.workers == Some(0) {
            return Err(ConfigError::Invalid(
                "server.workers must be at least 1".to_string(),
            ));
        }
        self.get_socket_addr()?;
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("Invalid address: {e}")))
    }
}
