use crate::{ConfigError, ConfigErrorResult, DEFAULT_COUNTDOWN_SECS};

use serde::Deserialize;

pub const MIN_COUNTDOWN_SECS: u32 = 1;
pub const MAX_COUNTDOWN_SECS: u32 = 600;

/// Verification code re-request gate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Seconds a phone must wait before another code can be requested
    pub countdown_secs: u32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
        }
    }
}

impl VerificationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.countdown_secs < MIN_COUNTDOWN_SECS || self.countdown_secs > MAX_COUNTDOWN_SECS {
            return Err(ConfigError::verification(format!(
                "verification.countdown_secs must be {}-{}, got {}",
                MIN_COUNTDOWN_SECS, MAX_COUNTDOWN_SECS, self.countdown_secs
            )));
        }

        Ok(())
    }
}
