use aifa_api::ApiError;
use aifa_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Initialization already in progress {location}")]
    InitializeInFlight { location: ErrorLocation },

    #[error("User identifier cannot be empty {location}")]
    InvalidIdentifier { location: ErrorLocation },

    #[error("Invalid phone number '{phone}' {location}")]
    InvalidPhone {
        phone: String,
        location: ErrorLocation,
    },

    #[error("Verification code cannot be empty {location}")]
    EmptyCode { location: ErrorLocation },

    #[error("Verification code already sent, retry in {remaining_secs}s {location}")]
    CooldownActive {
        remaining_secs: u32,
        location: ErrorLocation,
    },

    /// The service answered with a non-success code.
    #[error("{message} (code: {code}) {location}")]
    Rejected {
        code: i64,
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote service error: {source} {location}")]
    Api {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn initialize_in_flight() -> Self {
        Self::InitializeInFlight {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_identifier() -> Self {
        Self::InvalidIdentifier {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_phone(phone: impl Into<String>) -> Self {
        Self::InvalidPhone {
            phone: phone.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_code() -> Self {
        Self::EmptyCode {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cooldown_active(remaining_secs: u32) -> Self {
        Self::CooldownActive {
            remaining_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(code: i64, message: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing inline to the user.
    ///
    /// Service rejections surface the service's own text verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::InitializeInFlight { .. } => "Still starting up, please wait".to_string(),
            Self::InvalidIdentifier { .. } => "Missing user identifier".to_string(),
            Self::InvalidPhone { .. } => "Please enter a valid mobile number".to_string(),
            Self::EmptyCode { .. } => "Please enter the verification code".to_string(),
            Self::CooldownActive { remaining_secs, .. } => {
                format!("Please wait {remaining_secs}s before requesting another code")
            }
            Self::Rejected { message, .. } => message.clone(),
            Self::Api { .. } => "Network error, please try again".to_string(),
            Self::Store { .. } => "Could not save login state, please try again".to_string(),
        }
    }
}

impl From<ApiError> for AuthError {
    #[track_caller]
    fn from(source: ApiError) -> Self {
        Self::Api {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
