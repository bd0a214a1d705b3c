use crate::{AuthError, AuthState, Result as AuthResult, generate_client_identifier};

use aifa_api::{AuthParams, IdentityService};
use aifa_store::{CLIENT_IDENTIFIER_KEY, KeyValueStore, USER_IDENTIFIER_KEY};

use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::{Mutex, RwLock};

/// Establishes and holds the client and user identities for the life of the process.
///
/// Ordering guarantees:
/// - the client identifier is written to the store only after the identity
///   service accepted it;
/// - the user identifier is written before memory is updated, so a failed
///   write never leaves memory ahead of the store.
pub struct AuthController {
    store: Arc<dyn KeyValueStore>,
    identity: Arc<dyn IdentityService>,
    state: RwLock<AuthState>,
    /// Held for the whole of `initialize`; never awaited, only `try_lock`ed
    init_guard: Mutex<()>,
}

impl AuthController {
    pub fn new(store: Arc<dyn KeyValueStore>, identity: Arc<dyn IdentityService>) -> Self {
        Self {
            store,
            identity,
            state: RwLock::new(AuthState::loading()),
            init_guard: Mutex::new(()),
        }
    }

    /// Bootstrap the identities.
    ///
    /// 1. Load both identifiers (read failures count as absent)
    /// 2. Keep a stored client identifier as-is
    /// 3. Otherwise generate one, validate it remotely, persist it on success
    /// 4. Clear `loading`
    ///
    /// Store and network failures never fail this call; they leave the
    /// client identity empty until the next bootstrap. The only error is a
    /// second call while one is already running.
    pub async fn initialize(&self) -> AuthResult<AuthState> {
        let _guard = self
            .init_guard
            .try_lock()
            .map_err(|_| AuthError::initialize_in_flight())?;

        // The user identifier is loaded under the write lock so a concurrent
        // login or logout lands after it and is not overwritten below
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.user_identity = self.read_key(USER_IDENTIFIER_KEY).await;
        }

        let stored_client = self.read_key(CLIENT_IDENTIFIER_KEY).await;

        let client_identity = match stored_client {
            Some(existing) => {
                info!("Using stored client identifier");
                Some(existing)
            }
            None => self.register_client().await,
        };

        let mut state = self.state.write().await;
        state.client_identity = client_identity;
        state.loading = false;

        info!(
            "Bootstrap finished: client={}, user={}, authenticated={}",
            state.client_identity.is_some(),
            state.user_identity.is_some(),
            state.is_authenticated()
        );

        Ok(state.clone())
    }

    /// Persist `user_identifier` and mark the user logged in.
    pub async fn login(&self, user_identifier: &str) -> AuthResult<AuthState> {
        let user_identifier = user_identifier.trim();
        if user_identifier.is_empty() {
            return Err(AuthError::invalid_identifier());
        }

        self.store
            .set(USER_IDENTIFIER_KEY, user_identifier)
            .await
            .inspect_err(|e| error!("Failed to save user identifier: {e}"))?;

        let mut state = self.state.write().await;
        state.user_identity = Some(user_identifier.to_string());
        info!("User logged in");

        Ok(state.clone())
    }

    /// Forget the user. The client identity survives.
    pub async fn logout(&self) -> AuthResult<AuthState> {
        self.store
            .remove(USER_IDENTIFIER_KEY)
            .await
            .inspect_err(|e| error!("Failed to clear user identifier: {e}"))?;

        let mut state = self.state.write().await;
        state.user_identity = None;
        info!("User logged out");

        Ok(state.clone())
    }

    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn auth_params(&self) -> AuthParams {
        self.state.read().await.auth_params()
    }

    async fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                error!("Failed to read '{key}', treating as absent: {e}");
                None
            }
        }
    }

    /// Generate, validate and persist a new client identifier.
    async fn register_client(&self) -> Option<String> {
        let candidate = generate_client_identifier();
        info!("No stored client identifier, validating a new one");

        let response = match self.identity.check_client(&candidate).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Client check failed, continuing without client identity: {e}");
                return None;
            }
        };

        if !response.is_success() {
            warn!(
                "Client check rejected (code {}): {}",
                response.code, response.msg
            );
            return None;
        }

        match self.store.set(CLIENT_IDENTIFIER_KEY, &candidate).await {
            Ok(()) => {
                info!("Client identifier validated and stored");
                Some(candidate)
            }
            Err(e) => {
                error!("Validated client identifier could not be stored: {e}");
                None
            }
        }
    }
}
