//! Random remember-token generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore;

use super::SecretError;

/// Raw byte length of a generated remember token.
pub const REMEMBER_TOKEN_BYTES: usize = 32;

/// Generate a URL-safe base64 remember token of [`REMEMBER_TOKEN_BYTES`]
/// random bytes.
pub fn remember_token() -> String {
    let mut bytes = vec![0_u8; REMEMBER_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE.encode(bytes)
}

/// Number of raw bytes a base64 token decodes to.
///
/// Used by the validator's minimum-length check against caller-supplied
/// tokens.
pub fn decoded_len(token: &str) -> Result<usize, SecretError> {
    let bytes = URL_SAFE
        .decode(token)
        .map_err(|err| SecretError::token(err.to_string()))?;
    Ok(bytes.len())
}
