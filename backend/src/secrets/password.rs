//! Salted password hashing with an application-wide pepper.
//!
//! Passwords are hashed as `plaintext + pepper` through the PBKDF2
//! password-hash API, which renders the result as a self-describing PHC
//! string over a fresh random salt. Verification re-parses the stored
//! string, so the cost parameters can change without invalidating
//! existing hashes.

use pbkdf2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Params, Pbkdf2};
use rand::RngCore;
use zeroize::Zeroizing;

use super::SecretError;

/// PBKDF2 iteration count applied to every new hash.
///
/// Sized for interactive logins; stored hashes embed their own round
/// count, so this only governs newly created hashes.
const ROUNDS: u32 = 10_000;

/// Derived key length in bytes.
const OUTPUT_LENGTH: usize = 32;

/// Random salt length in bytes.
const SALT_LENGTH: usize = 16;

/// Outcome of comparing a stored hash against a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate password produced the stored hash.
    Match,
    /// The candidate password did not produce the stored hash.
    Mismatch,
}

fn params() -> Params {
    Params {
        rounds: ROUNDS,
        output_length: OUTPUT_LENGTH,
    }
}

/// Hash `plaintext + pepper` with a fresh random salt.
///
/// Returns the PHC string to persist. The peppered intermediate is
/// zeroized before returning.
pub fn hash(plaintext: &str, pepper: &str) -> Result<String, SecretError> {
    let peppered = Zeroizing::new(format!("{plaintext}{pepper}"));
    let mut salt_bytes = [0_u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|err| SecretError::hashing(err.to_string()))?;
    let hashed = Pbkdf2
        .hash_password_customized(peppered.as_bytes(), None, None, params(), &salt)
        .map_err(|err| SecretError::hashing(err.to_string()))?;
    Ok(hashed.to_string())
}

/// Compare a stored PHC string against `plaintext + pepper`.
///
/// Distinguishes a clean mismatch from other failures: an unparsable
/// stored hash or a backend fault is an error, not a [`Verdict`].
pub fn verify(stored: &str, plaintext: &str, pepper: &str) -> Result<Verdict, SecretError> {
    let peppered = Zeroizing::new(format!("{plaintext}{pepper}"));
    let parsed = PasswordHash::new(stored).map_err(|err| SecretError::hashing(err.to_string()))?;
    match Pbkdf2.verify_password(peppered.as_bytes(), &parsed) {
        Ok(()) => Ok(Verdict::Match),
        Err(password_hash::Error::Password) => Ok(Verdict::Mismatch),
        Err(err) => Err(SecretError::hashing(err.to_string())),
    }
}
