//! Device-local key-value storage for identity tokens.

pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod load_result;
pub mod memory_store;
pub mod stored_document;

#[cfg(test)]
mod tests;

pub use error::{Result, StoreError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use load_result::LoadResult;
pub use memory_store::MemoryStore;
pub use stored_document::{CURRENT_SCHEMA_VERSION, StoredDocument};

/// Key holding the validated anonymous client identifier.
pub const CLIENT_IDENTIFIER_KEY: &str = "client_identifier";
/// Key holding the identifier of the logged-in user.
pub const USER_IDENTIFIER_KEY: &str = "user_identifier";
