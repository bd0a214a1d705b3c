use crate::{
    ApiError, ApiResult, AuthParams, CLIENT_CHECK_PATH, IdentityService, PHONE_LOGIN_PATH,
    SEND_CODE_PATH, ServiceResponse, SessionService, WEB_VERSION_PATH,
};

use std::time::Duration;

use aifa_config::ApiConfig;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;

/// HTTP client for the identity and session services
pub struct Client {
    pub identity_base_url: String,
    pub session_base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `identity_base_url` - Identity service URL (e.g., "http://127.0.0.1:18888")
    /// * `session_base_url` - Session service URL (e.g., "http://api.aifa.chat/api/mapi")
    /// * `timeout` - Applied to every request
    pub fn new(
        identity_base_url: &str,
        session_base_url: &str,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            identity_base_url: identity_base_url.trim_end_matches('/').to_string(),
            session_base_url: session_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(
            &config.identity_base_url,
            &config.session_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn request(&self, method: Method, base_url: &str, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and decode the response envelope
    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<ServiceResponse> {
        let response = req.send().await.inspect_err(|e| {
            warn!("Request failed before a response arrived: {e}");
        })?;
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            warn!("{url} answered HTTP {status}");
            return Err(ApiError::status(status.as_u16(), url));
        }

        let body = response.text().await?;
        let envelope: ServiceResponse = serde_json::from_str(&body)?;

        debug!("{url} answered code {}", envelope.code);
        Ok(envelope)
    }

    /// Look up the web bundle version for a user.
    ///
    /// Sent as `GET /auth/webversion?env=<env>&uguid=<identifier>` to the identity host.
    pub async fn web_version(&self, env: &str, identifier: &str) -> ApiResult<ServiceResponse> {
        let req = self
            .request(Method::GET, &self.identity_base_url, WEB_VERSION_PATH)
            .query(&[("env", env), ("uguid", identifier)]);
        self.execute(req).await
    }
}

#[async_trait]
impl IdentityService for Client {
    async fn check_client(&self, client_identifier: &str) -> ApiResult<ServiceResponse> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ClientCheckRequest<'a> {
            client_identifier: &'a str,
        }

        let body = ClientCheckRequest { client_identifier };
        let req = self
            .request(Method::POST, &self.identity_base_url, CLIENT_CHECK_PATH)
            .json(&body);
        self.execute(req).await
    }
}

#[async_trait]
impl SessionService for Client {
    async fn send_code(&self, phone: &str, params: &AuthParams) -> ApiResult<ServiceResponse> {
        #[derive(Serialize)]
        struct SendCodeRequest<'a> {
            phone: &'a str,
            #[serde(flatten)]
            params: &'a AuthParams,
        }

        let body = SendCodeRequest { phone, params };
        let req = self
            .request(Method::POST, &self.session_base_url, SEND_CODE_PATH)
            .json(&body);
        self.execute(req).await
    }

    async fn phone_login(
        &self,
        phone: &str,
        code: &str,
        iv: &str,
        params: &AuthParams,
    ) -> ApiResult<ServiceResponse> {
        #[derive(Serialize)]
        struct PhoneLoginRequest<'a> {
            phone: &'a str,
            vcode: &'a str,
            iv: &'a str,
            #[serde(flatten)]
            params: &'a AuthParams,
        }

        let body = PhoneLoginRequest {
            phone,
            vcode: code,
            iv,
            params,
        };
        let req = self
            .request(Method::POST, &self.session_base_url, PHONE_LOGIN_PATH)
            .json(&body);
        self.execute(req).await
    }
}
