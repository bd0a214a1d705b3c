use aifa_config::SUCCESS_CODE;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope every remote endpoint answers with.
///
/// Older session endpoints name the message field `message` instead of `msg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub code: i64,
    #[serde(default, alias = "message")]
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Decode `data` into `T`. Returns None when absent or shaped differently.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }

    /// The service message, or a fallback naming the code when the service sent none.
    pub fn message_or_code(&self) -> String {
        if self.msg.trim().is_empty() {
            format!("request rejected with code {}", self.code)
        } else {
            self.msg.clone()
        }
    }
}
