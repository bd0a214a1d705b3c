use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Transport-level failures talking to a remote service.
///
/// A well-formed response carrying a non-success `code` is NOT an error here;
/// callers inspect [`crate::ServiceResponse::is_success`].
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} from {url} {location}")]
    Status {
        status: u16,
        url: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ApiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ApiError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a status error with location
    #[track_caller]
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Http { source, .. } if source.is_timeout())
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ApiError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ApiError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
