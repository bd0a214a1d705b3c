use crate::{AuthError, Result as AuthResult};

const PHONE_LEN: usize = 11;

/// Mainland mobile number: 11 digits, leading `1`, second digit `3`-`9`.
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();

    bytes.len() == PHONE_LEN
        && bytes.iter().all(u8::is_ascii_digit)
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
}

#[track_caller]
pub fn validate_phone(phone: &str) -> AuthResult<()> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(AuthError::invalid_phone(phone))
    }
}
