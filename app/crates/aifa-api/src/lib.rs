//! aifa-api
//!
//! HTTP client for the remote identity and session services.

pub(crate) mod auth_params;
pub(crate) mod client;
pub(crate) mod phone_login_data;
pub(crate) mod service_response;
pub(crate) mod services;


pub use auth_params::AuthParams;
pub use client::{ApiError, ApiResult, Client};
pub use phone_login_data::PhoneLoginData;
pub use service_response::ServiceResponse;
pub use services::{IdentityService, SessionService};

pub const CLIENT_CHECK_PATH: &str = "/auth/ClientCheck";
pub const SEND_CODE_PATH: &str = "/auth/SendVCode";
pub const PHONE_LOGIN_PATH: &str = "/auth/PhoneLogin";
pub const WEB_VERSION_PATH: &str = "/auth/webversion";
