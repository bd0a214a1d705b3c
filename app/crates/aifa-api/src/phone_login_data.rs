use serde::Deserialize;

/// Payload of a successful phone login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLoginData {
    #[serde(default, alias = "uguid")]
    pub user_identifier: Option<String>,
}

impl PhoneLoginData {
    /// The user identifier, if present and non-blank.
    pub fn user_identifier(&self) -> Option<&str> {
        self.user_identifier
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
