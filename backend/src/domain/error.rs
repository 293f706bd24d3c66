//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope; every variant has a
//! user-safe rendering via [`Error::public_message`].

use thiserror::Error;

use crate::secrets::SecretError;

/// Field-level validation failures raised by the validator layer.
///
/// Each variant names the field and the rule it broke. Validation errors
/// short-circuit the pipeline at the first failing check and are returned
/// to the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Email address was missing when creating or updating a user.
    #[error("email address is required")]
    EmailRequired,
    /// Email address did not match the accepted address format.
    #[error("email address is not valid")]
    EmailInvalid,
    /// Email address is already in use by another user.
    #[error("email address is already taken")]
    EmailTaken,
    /// Password was missing when creating a user.
    #[error("password is required")]
    PasswordRequired,
    /// Password was shorter than the minimum length.
    #[error("password must be at least 8 characters long")]
    PasswordTooShort,
    /// Remember-token hash was missing after the hashing step.
    #[error("remember token is required")]
    RememberRequired,
    /// Remember token decoded to fewer than the minimum raw bytes.
    #[error("remember token must be at least 32 bytes")]
    RememberTooShort,
    /// Gallery title was empty.
    #[error("title is required")]
    TitleRequired,
    /// Gallery had no owning user id.
    #[error("user id is required")]
    OwnerRequired,
}

/// Errors surfaced by the data-access layers.
///
/// `Store` and `Secret` carry opaque underlying detail for logs; their
/// public rendering never exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// No record matched where one was required.
    #[error("resource not found")]
    NotFound,
    /// Credential verification failed against the stored hash.
    #[error("incorrect password provided")]
    PasswordIncorrect,
    /// A validation check rejected the candidate record.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Opaque failure from the underlying record store.
    #[error("store operation failed: {message}")]
    Store {
        /// Adapter-supplied failure detail, for logs only.
        message: String,
    },
    /// Opaque failure from a secret primitive.
    #[error("secret primitive failed: {message}")]
    Secret {
        /// Primitive-supplied failure detail, for logs only.
        message: String,
    },
}

impl Error {
    /// Helper for opaque store failures.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Helper for opaque secret-primitive failures.
    pub fn secret(message: impl Into<String>) -> Self {
        Self::Secret {
            message: message.into(),
        }
    }

    /// User-safe rendering of the error.
    ///
    /// Validation, not-found, and credential failures render their own
    /// message sentence-cased; opaque variants render a generic message
    /// with the internal detail stripped.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Error, ValidationError};
    ///
    /// let err = Error::from(ValidationError::EmailTaken);
    /// assert_eq!(err.public_message(), "Email address is already taken");
    /// ```
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound | Self::PasswordIncorrect => sentence_case(&self.to_string()),
            Self::Validation(reason) => sentence_case(&reason.to_string()),
            _ => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

impl From<SecretError> for Error {
    fn from(error: SecretError) -> Self {
        Self::secret(error.to_string())
    }
}

fn sentence_case(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
