//! Runtime configuration read from the process environment.
//!
//! A `.env` file in the working directory is loaded first when present, so
//! local development does not need exported variables.

use std::env;
use std::io::ErrorKind;
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
    #[error("failed to load .env: {0}")]
    EnvFile(#[from] dotenv::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub paystack_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            paystack_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_file(dotenv::dotenv())?;
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|value| !value.trim().is_empty()) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let paystack_api_key = lookup("PAYSTACK_API_KEY").filter(|key| !key.is_empty());

        Ok(Self {
            port,
            paystack_api_key,
        })
    }
}

/// A missing `.env` file is fine; one that exists but cannot be read or
/// parsed is reported.
fn load_env_file(result: Result<PathBuf, dotenv::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
