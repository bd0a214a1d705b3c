use uuid::Uuid;

/// Generate a candidate client identifier: 16 random octets as 32 lowercase hex characters.
pub fn generate_client_identifier() -> String {
    Uuid::new_v4().simple().to_string()
}
