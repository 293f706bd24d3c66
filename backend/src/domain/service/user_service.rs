//! User service: credential verification over the validated repository
//! chain.

use std::sync::Arc;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::error::Error;
use crate::domain::ports::UserRepository;
use crate::domain::user::{User, UserId};
use crate::secrets::password::{self, Verdict};

/// User entity service.
///
/// Adds [`UserService::authenticate`]; all repository methods delegate to
/// the wrapped chain unchanged.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    pepper: Zeroizing<String>,
}

impl UserService {
    /// Wrap a repository chain (normally the validator over the raw
    /// store layer; see [`crate::compose::user_service`] for the
    /// standard wiring).
    pub fn new(repository: Arc<dyn UserRepository>, pepper: &str) -> Self {
        Self {
            repository,
            pepper: Zeroizing::new(pepper.to_owned()),
        }
    }

    /// Verify an email/password pair.
    ///
    /// Returns the matching user on success. Fails with
    /// [`Error::NotFound`] when no user owns the normalized email,
    /// [`Error::PasswordIncorrect`] when the stored hash does not match
    /// `password + pepper`, and an opaque error when verification itself
    /// fails.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, Error> {
        let password = Zeroizing::new(password.to_owned());
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(Error::NotFound)?;

        match password::verify(&user.password_hash, &password, &self.pepper)? {
            Verdict::Match => Ok(user),
            Verdict::Mismatch => Err(Error::PasswordIncorrect),
        }
    }
}

#[async_trait]
impl UserRepository for UserService {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.repository.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        self.repository.find_by_email(email).await
    }

    async fn find_by_remember(&self, token: &str) -> Result<Option<User>, Error> {
        self.repository.find_by_remember(token).await
    }

    async fn create(&self, user: &mut User) -> Result<(), Error> {
        self.repository.create(user).await
    }

    async fn update(&self, user: &mut User) -> Result<(), Error> {
        self.repository.update(user).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        self.repository.delete(id).await
    }
}
