//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Interface to bind (`HOST`)
    pub host: String,
    /// Port to bind (`PORT`)
    pub port: u16,
}

impl Config {
    /// Reads the configuration, falling back to defaults for unset variables
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is set but is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Socket address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "PORT".to_string(),
            reason: e.to_string(),
        })
}
