use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Where the device-local identity store lives, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub filename: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            filename: String::from(DEFAULT_STORAGE_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.filename.trim().is_empty() {
            return Err(ConfigError::storage("storage.filename cannot be empty"));
        }

        if Path::new(&self.filename).is_absolute() || self.filename.contains("..") {
            return Err(ConfigError::storage(
                "storage.filename must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
