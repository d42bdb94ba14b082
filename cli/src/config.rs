//! Runtime settings for the `ecohabit` binary.
//!
//! Each value is taken from the first source that provides it:
//! 1. command-line flags
//! 2. environment variables (`ECOHABIT_LOG`, `ECOHABIT_LOG_DIR`)
//! 3. defaults (`~/.ecohabit`, `info`)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

const LOG_FILTER_ENV: &str = "ECOHABIT_LOG";
const LOG_DIR_ENV: &str = "ECOHABIT_LOG_DIR";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_DIR_NAME: &str = ".ecohabit";
const DEFAULT_TICK_RATE_MS: u64 = 250;

pub const LOG_FILE_NAME: &str = "ecohabit.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub log_filter: String,
    pub tick_rate: Duration,
}

impl Config {
    pub fn resolve(log_dir: Option<PathBuf>, log_level: Option<String>) -> Result<Self> {
        Self::resolve_with(log_dir, log_level, |key| env::var(key).ok())
    }

    fn resolve_with<F>(log_dir: Option<PathBuf>, log_level: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_dir = match log_dir.or_else(|| lookup(LOG_DIR_ENV).map(PathBuf::from)) {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?
                .join(DEFAULT_DIR_NAME),
        };

        let log_filter = log_level
            .or_else(|| lookup(LOG_FILTER_ENV))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            log_dir,
            log_filter,
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
