use aifa_api::AuthParams;

use serde::Serialize;

/// Composed view of the two identities. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    pub client_identity: Option<String>,
    pub user_identity: Option<String>,
    /// True until the first bootstrap has finished, whatever its outcome
    pub loading: bool,
}

impl AuthState {
    /// State before bootstrap has run.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Either identity is enough: an anonymous, validated device is authenticated.
    pub fn is_authenticated(&self) -> bool {
        let present = |id: &Option<String>| id.as_deref().is_some_and(|id| !id.is_empty());
        present(&self.client_identity) || present(&self.user_identity)
    }

    pub fn auth_params(&self) -> AuthParams {
        AuthParams {
            client_identifier: self.client_identity.clone(),
            user_identifier: self.user_identity.clone(),
        }
    }
}
