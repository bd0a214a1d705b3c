//! Client identity bootstrap and phone-verification login.
//!
//! [`AuthController`] owns the composed [`AuthState`]; [`VerificationFlow`]
//! drives the send-code / verify-code exchange and hands the resulting user
//! identifier to the controller.

pub mod auth_controller;
pub mod auth_state;
pub mod countdown;
pub mod error;
pub mod identifier;
pub mod phone;
pub mod verification_flow;
pub mod verification_session;

#[cfg(test)]
mod tests;

pub use auth_controller::AuthController;
pub use auth_state::AuthState;
pub use countdown::Countdown;
pub use error::{AuthError, Result};
pub use identifier::generate_client_identifier;
pub use phone::{is_valid_phone, validate_phone};
pub use verification_flow::VerificationFlow;
pub use verification_session::VerificationSession;
