//! Opaque random tokens for email verification and password reset.
//!
//! These are plain unguessable bearer strings, unrelated to the account id
//! and distinct from the signed JWTs used for API auth. A token is stored
//! on the account row and compared verbatim at consumption time.

use std::fmt::Write;

use rand::RngCore;

/// Number of random bytes per token (48 hex characters).
const TOKEN_BYTES: usize = 24;

/// Generate a cryptographically random opaque token, hex-encoded.
pub fn generate_opaque_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    let mut out = String::with_capacity(TOKEN_BYTES * 2);
    for byte in bytes {
        write!(out, "{byte:02x}").expect("writing to a String cannot fail");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_48_hex_chars() {
        let token = generate_opaque_token();
        assert_eq!(token.len(), 48);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_not_reused() {
        let a = generate_opaque_token();
        let b = generate_opaque_token();
        assert_ne!(a, b, "two generated tokens must differ");
    }
}
