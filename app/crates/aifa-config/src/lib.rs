mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod verification_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use verification_config::VerificationConfig;

/// Response code the remote services use for success. Every other code is a rejection.
pub const SUCCESS_CODE: i64 = 1000;

const CONFIG_DIR_ENV: &str = "AIFA_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".aifa";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_IDENTITY_BASE_URL: &str = "http://152.136.11.133:18888";
const DEFAULT_SESSION_BASE_URL: &str = "http://api.aifa.chat/api/mapi";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_WEB_VERSION_ENV: &str = "test";
const DEFAULT_STORAGE_FILENAME: &str = "identity.json";
const DEFAULT_COUNTDOWN_SECS: u32 = 60;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
