use serde::Serialize;

/// Identity fields attached to session-service requests.
///
/// Both are optional: an anonymous device sends only its client identifier,
/// a device that has not been validated yet sends neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_identifier: Option<String>,
}

impl AuthParams {
    pub fn is_empty(&self) -> bool {
        self.client_identifier.is_none() && self.user_identifier.is_none()
    }
}
