//! Secret primitives consumed by the validation and service layers.
//!
//! Wraps the external hashing crates behind small, documented contracts:
//! salted password hashing with an application-wide pepper
//! ([`password`]), deterministic keyed hashing for remember tokens
//! ([`keyed`]), and random token generation ([`token`]). Nothing in this
//! module touches the record store.

use thiserror::Error;

pub mod keyed;
pub mod password;
pub mod token;

pub use keyed::KeyedHasher;

/// Failures surfaced by the secret primitives.
///
/// These are opaque to callers: the domain layer maps them to its own
/// opaque error variant without reinterpreting the payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    /// The password hashing backend rejected the input or produced an
    /// unparsable hash.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
    /// The keyed hasher could not be initialised with the configured key.
    #[error("keyed hashing failed: {message}")]
    Keyed { message: String },
    /// A token could not be decoded as base64.
    #[error("token decoding failed: {message}")]
    Token { message: String },
}

impl SecretError {
    /// Helper for password hashing failures.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }

    /// Helper for keyed hashing failures.
    pub fn keyed(message: impl Into<String>) -> Self {
        Self::Keyed {
            message: message.into(),
        }
    }

    /// Helper for token decoding failures.
    pub fn token(message: impl Into<String>) -> Self {
        Self::Token {
            message: message.into(),
        }
    }
}
