//! Runtime settings read from the environment.
//!
//! `.env` is loaded by the binary before [`Config::from_env`] runs, so values
//! there behave like regular environment variables.

use std::path::PathBuf;

use crate::city::City;

pub const DATA_DIR_VAR: &str = "BIKESHARE_DATA_DIR";
pub const LOG_FILE_VAR: &str = "LOG_FILE_PATH";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOG_FILE: &str = "logs/bikeshare_stats.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one CSV per city.
    pub data_dir: PathBuf,
    pub log_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: lookup(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            log_file_path: lookup(LOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file_path),
        }
    }

    /// Replaces the data directory when one was given on the command line.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn city_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}
