//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Application configuration.
///
/// The values here are handed to the storage adapter when the deployable
/// edge wires the kernel up; the kernel itself opens no connections.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL.
    pub database_url: String,

    /// Maximum database connections in pool (default: 10).
    pub database_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL environment variable is required")?;

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?;

        Ok(Self {
            database_url,
            database_max_connections,
        })
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_url_and_defaults_pool_size() {
        // set_var is unsafe in edition 2024; this test owns both variables.
        unsafe {
            env::set_var("DATABASE_URL", "postgres://localhost/roster");
            env::remove_var("DATABASE_MAX_CONNECTIONS");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/roster");
        assert_eq!(config.database_max_connections, 10);
    }
}
