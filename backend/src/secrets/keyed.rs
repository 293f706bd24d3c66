//! Deterministic keyed hashing for remember tokens.
//!
//! Only the HMAC of a remember token is ever persisted; the plaintext
//! stays with the client. Hashing is deterministic so lookups can hash
//! caller-supplied tokens and match against stored digests.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroizing;

use super::SecretError;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA-256 hasher bound to an application-wide secret key.
///
/// The digest is rendered as lowercase hex.
#[derive(Clone)]
pub struct KeyedHasher {
    key: Zeroizing<Vec<u8>>,
}

impl KeyedHasher {
    /// Create a hasher from the configured secret key.
    pub fn new(key: &str) -> Self {
        Self {
            key: Zeroizing::new(key.as_bytes().to_vec()),
        }
    }

    /// Hash a plaintext token into its stored digest form.
    pub fn hash(&self, plaintext: &str) -> Result<String, SecretError> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|err| SecretError::keyed(err.to_string()))?;
        mac.update(plaintext.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for KeyedHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedHasher").finish_non_exhaustive()
    }
}
