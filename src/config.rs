//! Configuration management for the address book binary.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_BOOK_FILE: &str = "address_book.txt";

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the file backing the address book (default: "address_book.txt")
    pub book_file: PathBuf,

    /// Log level used when RUST_LOG is not set (default: "error")
    pub log_level: String,

    /// Maximum number of search results to print, 0 for no limit (default: 0)
    pub max_search_results: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Path of the backing file (default: "address_book.txt")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `MAX_SEARCH_RESULTS`: Max search results to print (default: 0, unlimited)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let book_file = env::var("ADDRESS_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_FILE));

        if book_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_search_results = Self::parse_env_usize("MAX_SEARCH_RESULTS", 0)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_file,
            log_level,
            max_search_results,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            log_level: "error".to_string(),
            max_search_results: 0,
        }
    }
}
