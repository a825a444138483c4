//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path of the SQLite database file
    pub database_path: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `DATABASE_PATH` - SQLite database file (default: hangar.db)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "hangar.db".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            database_path: "hangar.db".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, PoisonError};

    use super::*;

    // Environment variables are process-wide, so every test that touches
    // them holds this lock for its whole body.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_path, "hangar.db");
    }

    #[test]
    fn test_config_from_env_defaults() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("DATABASE_PATH");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_path, "hangar.db");
    }

    #[test]
    fn test_config_reads_env_overrides() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        env::set_var("SERVER_PORT", "9090");
        env::set_var("DATABASE_PATH", "fleet.db");

        let config = Config::from_env();
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.database_path, "fleet.db");

        env::remove_var("SERVER_PORT");
        env::remove_var("DATABASE_PATH");
    }

    #[test]
    fn test_config_ignores_unparseable_port() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        env::set_var("SERVER_PORT", "not-a-port");
        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        env::remove_var("SERVER_PORT");
    }
}
