use crate::{ApiResult, AuthParams, ServiceResponse};

use async_trait::async_trait;

/// Remote service that vouches for a locally generated client identifier.
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn check_client(&self, client_identifier: &str) -> ApiResult<ServiceResponse>;
}

/// Remote service handling phone verification.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Ask the service to text a one-time code to `phone`.
    async fn send_code(&self, phone: &str, params: &AuthParams) -> ApiResult<ServiceResponse>;

    /// Exchange `phone` + `code` for a user identifier.
    ///
    /// `iv` is carried for protocol compatibility and is usually empty.
    async fn phone_login(
        &self,
        phone: &str,
        code: &str,
        iv: &str,
        params: &AuthParams,
    ) -> ApiResult<ServiceResponse>;
}
