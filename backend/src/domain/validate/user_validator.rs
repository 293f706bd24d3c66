//! User validation and normalization decorator.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use regex::Regex;
use zeroize::{Zeroize, Zeroizing};

use crate::domain::error::{Error, ValidationError};
use crate::domain::ports::UserRepository;
use crate::domain::user::{User, UserId};
use crate::secrets::{KeyedHasher, password, token};

use super::normalized_email;

/// Minimum accepted password length in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum accepted remember-token length in decoded bytes.
pub const REMEMBER_MIN_BYTES: usize = 32;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part, domain, and a 2-16 character TLD; input is already
        // lowercased by normalization before this check runs.
        let pattern = r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,16}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A single in-process validation or normalization step.
///
/// Steps mutate the candidate record in place and abort the pipeline on
/// the first error.
pub(crate) type UserCheck = fn(&UserValidator, &mut User) -> Result<(), Error>;

/// Ordered in-process checks for user creation.
///
/// The order is load-bearing: the password must be hashed before the
/// hash-required check runs, and the email must be normalized before the
/// format check and the availability lookup see it. The store-backed
/// availability check runs as the final, awaited step after this list.
pub(crate) const USER_CREATE_CHECKS: &[UserCheck] = &[
    UserValidator::password_required,
    UserValidator::password_min_length,
    UserValidator::hash_password,
    UserValidator::password_hash_required,
    UserValidator::set_remember_if_unset,
    UserValidator::remember_min_bytes,
    UserValidator::hmac_remember,
    UserValidator::remember_hash_required,
    UserValidator::normalize_email,
    UserValidator::email_required,
    UserValidator::email_format,
];

/// Ordered in-process checks for user updates.
///
/// Same as creation minus the password-required and token-generation
/// steps: the password and remember steps are no-ops when the
/// corresponding plaintext is empty, which is what allows partial
/// updates.
pub(crate) const USER_UPDATE_CHECKS: &[UserCheck] = &[
    UserValidator::password_min_length,
    UserValidator::hash_password,
    UserValidator::password_hash_required,
    UserValidator::remember_min_bytes,
    UserValidator::hmac_remember,
    UserValidator::remember_hash_required,
    UserValidator::normalize_email,
    UserValidator::email_required,
    UserValidator::email_format,
];

/// Validating decorator over a [`UserRepository`].
///
/// Hashes credentials, normalizes fields, and enforces the user
/// invariants before delegating to the wrapped layer. Lookup methods
/// normalize or hash their input first, so callers pass raw plaintext.
pub struct UserValidator {
    inner: Arc<dyn UserRepository>,
    keyed: KeyedHasher,
    pepper: Zeroizing<String>,
}

impl UserValidator {
    /// Wrap an inner repository with validation.
    pub fn new(inner: Arc<dyn UserRepository>, keyed: KeyedHasher, pepper: &str) -> Self {
        Self {
            inner,
            keyed,
            pepper: Zeroizing::new(pepper.to_owned()),
        }
    }

    fn run_checks(&self, user: &mut User, checks: &[UserCheck]) -> Result<(), Error> {
        for check in checks {
            check(self, user)?;
        }
        Ok(())
    }

    fn password_required(&self, user: &mut User) -> Result<(), Error> {
        if user.password.is_empty() {
            return Err(ValidationError::PasswordRequired.into());
        }
        Ok(())
    }

    fn password_min_length(&self, user: &mut User) -> Result<(), Error> {
        if user.password.is_empty() {
            return Ok(());
        }
        if user.password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(ValidationError::PasswordTooShort.into());
        }
        Ok(())
    }

    /// Hash the plaintext password with the app-wide pepper, then zeroize
    /// the plaintext. Skipped when no password was supplied, so updates
    /// without a password change keep the stored hash.
    fn hash_password(&self, user: &mut User) -> Result<(), Error> {
        if user.password.is_empty() {
            return Ok(());
        }
        user.password_hash = password::hash(&user.password, &self.pepper)?;
        user.password.zeroize();
        Ok(())
    }

    fn password_hash_required(&self, user: &mut User) -> Result<(), Error> {
        if user.password_hash.is_empty() {
            return Err(ValidationError::PasswordRequired.into());
        }
        Ok(())
    }

    fn set_remember_if_unset(&self, user: &mut User) -> Result<(), Error> {
        if user.remember.is_empty() {
            user.remember = token::remember_token();
        }
        Ok(())
    }

    fn remember_min_bytes(&self, user: &mut User) -> Result<(), Error> {
        if user.remember.is_empty() {
            return Ok(());
        }
        if token::decoded_len(&user.remember)? < REMEMBER_MIN_BYTES {
            return Err(ValidationError::RememberTooShort.into());
        }
        Ok(())
    }

    /// Hash the plaintext remember token, then zeroize the plaintext.
    fn hmac_remember(&self, user: &mut User) -> Result<(), Error> {
        if user.remember.is_empty() {
            return Ok(());
        }
        user.remember_hash = self.keyed.hash(&user.remember)?;
        user.remember.zeroize();
        Ok(())
    }

    fn remember_hash_required(&self, user: &mut User) -> Result<(), Error> {
        if user.remember_hash.is_empty() {
            return Err(ValidationError::RememberRequired.into());
        }
        Ok(())
    }

    fn normalize_email(&self, user: &mut User) -> Result<(), Error> {
        user.email = normalized_email(&user.email);
        Ok(())
    }

    fn email_required(&self, user: &mut User) -> Result<(), Error> {
        if user.email.is_empty() {
            return Err(ValidationError::EmailRequired.into());
        }
        Ok(())
    }

    fn email_format(&self, user: &mut User) -> Result<(), Error> {
        if user.email.is_empty() {
            return Ok(());
        }
        if !email_regex().is_match(&user.email) {
            return Err(ValidationError::EmailInvalid.into());
        }
        Ok(())
    }

    /// Final create/update step: the candidate's normalized email must be
    /// unowned, or owned by the candidate itself (idempotent
    /// self-update). Absence is the expected, non-error outcome here.
    async fn email_available(&self, user: &User) -> Result<(), Error> {
        match self.inner.find_by_email(&user.email).await? {
            None => Ok(()),
            Some(existing) if existing.id == user.id => Ok(()),
            Some(_) => Err(ValidationError::EmailTaken.into()),
        }
    }
}

#[async_trait]
impl UserRepository for UserValidator {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let normalized = normalized_email(email);
        self.inner.find_by_email(&normalized).await
    }

    async fn find_by_remember(&self, token: &str) -> Result<Option<User>, Error> {
        let digest = self.keyed.hash(token)?;
        self.inner.find_by_remember(&digest).await
    }

    async fn create(&self, user: &mut User) -> Result<(), Error> {
        self.run_checks(user, USER_CREATE_CHECKS)?;
        self.email_available(user).await?;
        self.inner.create(user).await
    }

    async fn update(&self, user: &mut User) -> Result<(), Error> {
        self.run_checks(user, USER_UPDATE_CHECKS)?;
        self.email_available(user).await?;
        self.inner.update(user).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        self.inner.delete(id).await
    }
}
