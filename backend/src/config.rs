//! Application secret configuration.
//!
//! Centralises the two secrets the data-access layers need — the
//! password pepper and the remember-token HMAC key — so they are read
//! and validated consistently and can be tested in isolation.

use std::fmt;

use mockable::Env;
use thiserror::Error;
use zeroize::Zeroizing;

/// Environment variable holding the password pepper.
pub const PEPPER_ENV: &str = "APP_PEPPER";
/// Environment variable holding the remember-token HMAC key.
pub const HMAC_KEY_ENV: &str = "APP_HMAC_KEY";

/// Errors raised while reading secret configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {name}")]
    MissingEnv { name: &'static str },
    /// An environment variable is set to an unusable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidEnv {
        name: &'static str,
        reason: &'static str,
    },
}

/// Application-wide secrets.
///
/// Both values are held in zeroizing buffers and redacted from debug
/// output; neither is ever logged.
#[derive(Clone)]
pub struct Secrets {
    pepper: Zeroizing<String>,
    hmac_key: Zeroizing<String>,
}

impl Secrets {
    /// Build secrets from explicit values.
    pub fn new(pepper: impl Into<String>, hmac_key: impl Into<String>) -> Self {
        Self {
            pepper: Zeroizing::new(pepper.into()),
            hmac_key: Zeroizing::new(hmac_key.into()),
        }
    }

    /// Read secrets from the environment.
    ///
    /// Requires [`PEPPER_ENV`] and [`HMAC_KEY_ENV`] to be set and
    /// non-blank.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let pepper = require(env, PEPPER_ENV)?;
        let hmac_key = require(env, HMAC_KEY_ENV)?;
        Ok(Self::new(pepper, hmac_key))
    }

    /// The password pepper.
    pub fn pepper(&self) -> &str {
        &self.pepper
    }

    /// The remember-token HMAC key.
    pub fn hmac_key(&self) -> &str {
        &self.hmac_key
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("pepper", &"<redacted>")
            .field("hmac_key", &"<redacted>")
            .finish()
    }
}

fn require<E: Env>(env: &E, name: &'static str) -> Result<String, ConfigError> {
    match env.string(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnv {
            name,
            reason: "must not be blank",
        }),
        Some(value) => Ok(value),
        None => Err(ConfigError::MissingEnv { name }),
    }
}
