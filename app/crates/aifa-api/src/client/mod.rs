pub(crate) mod client;
pub(crate) mod error;

pub use client::Client;
pub use error::{ApiError, Result as ApiResult};
