use crate::{
    AuthController, AuthError, AuthState, Countdown, Result as AuthResult, VerificationSession,
    validate_phone,
};

use aifa_api::{PhoneLoginData, ServiceResponse, SessionService};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Mutex;

/// Phone verification: request a code, then exchange it for a user identifier.
///
/// Dropping the flow cancels any running countdown.
pub struct VerificationFlow {
    controller: Arc<AuthController>,
    sessions: Arc<dyn SessionService>,
    countdown_secs: u32,
    session: Arc<Mutex<VerificationSession>>,
    countdown: Mutex<Option<Countdown>>,
    /// Held for the whole of `request_code`, from the cooldown check until the countdown starts
    request_guard: Mutex<()>,
}

impl VerificationFlow {
    pub fn new(
        controller: Arc<AuthController>,
        sessions: Arc<dyn SessionService>,
        countdown_secs: u32,
    ) -> Self {
        Self {
            controller,
            sessions,
            countdown_secs,
            session: Arc::new(Mutex::new(VerificationSession::new())),
            countdown: Mutex::new(None),
            request_guard: Mutex::new(()),
        }
    }

    /// Ask the session service to send a code to `phone`.
    ///
    /// Refused while a previous countdown is still running. Overlapping calls
    /// run one after the other, so a second call sees the first one's
    /// countdown. On success a new countdown starts; on rejection the service
    /// message is returned.
    pub async fn request_code(&self, phone: &str) -> AuthResult<ServiceResponse> {
        validate_phone(phone)?;

        let _in_flight = self.request_guard.lock().await;

        {
            let session = self.session.lock().await;
            if !session.can_request() {
                return Err(AuthError::cooldown_active(session.remaining_secs()));
            }
        }

        let params = self.controller.auth_params().await;
        let response = self
            .sessions
            .send_code(phone, &params)
            .await
            .inspect_err(|e| warn!("Send code request failed: {e}"))?;

        if !response.is_success() {
            warn!("Send code rejected (code {})", response.code);
            return Err(AuthError::rejected(
                response.code,
                response.message_or_code(),
            ));
        }

        self.session
            .lock()
            .await
            .start(phone, self.countdown_secs);
        // Replacing the handle drops (and aborts) any previous ticker
        *self.countdown.lock().await = Some(Countdown::start(self.session.clone()));

        info!("Verification code sent, next request in {}s", self.countdown_secs);
        Ok(response)
    }

    /// Verify `code` for `phone` and log the returned user in.
    ///
    /// `iv` is forwarded unchanged; pass an empty string when unused.
    /// Anything short of a success code with a user identifier leaves the
    /// auth state untouched.
    pub async fn verify_and_login(
        &self,
        phone: &str,
        code: &str,
        iv: &str,
    ) -> AuthResult<AuthState> {
        validate_phone(phone)?;

        let code = code.trim();
        if code.is_empty() {
            return Err(AuthError::empty_code());
        }

        let params = self.controller.auth_params().await;
        let response = self
            .sessions
            .phone_login(phone, code, iv, &params)
            .await
            .inspect_err(|e| warn!("Phone login request failed: {e}"))?;

        if !response.is_success() {
            warn!("Phone login rejected (code {})", response.code);
            return Err(AuthError::rejected(
                response.code,
                response.message_or_code(),
            ));
        }

        let data: PhoneLoginData = response.data_as().unwrap_or_default();
        let Some(user_identifier) = data.user_identifier() else {
            warn!("Phone login succeeded without a user identifier");
            return Err(AuthError::rejected(
                response.code,
                "Login response did not include a user identifier",
            ));
        };

        self.controller.login(user_identifier).await
    }

    /// Seconds until another code may be requested.
    pub async fn remaining_secs(&self) -> u32 {
        self.session.lock().await.remaining_secs()
    }

    pub async fn can_request(&self) -> bool {
        self.session.lock().await.can_request()
    }

    /// Stop the countdown and allow an immediate re-request.
    pub async fn cancel_countdown(&self) {
        if let Some(countdown) = self.countdown.lock().await.take() {
            countdown.cancel();
        }
        self.session.lock().await.reset();
    }
}
