//! Record-store-backed [`UserRepository`] implementation.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::error::Error;
use crate::domain::ports::{Filter, RecordStore, USERS_COLLECTION, UserRepository};
use crate::domain::user::{User, UserId};

use super::documents::{self, FIELD_EMAIL, FIELD_ID, FIELD_REMEMBER_HASH};
use super::store_error_mapping::map_store_error;

/// Raw user data-access layer.
///
/// Translates entity operations into record-store calls against the
/// `users` collection. Expects already-normalized emails and
/// already-hashed remember tokens; the validator layer above supplies
/// both.
pub struct StoreUserRepository {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
}

impl StoreUserRepository {
    /// Create a repository over the given store and clock.
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    async fn find_one_where(&self, filter: Filter) -> Result<Option<User>, Error> {
        let document = self
            .store
            .find_one(USERS_COLLECTION, &filter)
            .await
            .map_err(map_store_error)?;
        document
            .map(documents::decode)
            .transpose()
            .map_err(map_store_error)
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.find_one_where(Filter::by(FIELD_ID, id.to_string()))
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        self.find_one_where(Filter::by(FIELD_EMAIL, email)).await
    }

    async fn find_by_remember(&self, token: &str) -> Result<Option<User>, Error> {
        self.find_one_where(Filter::by(FIELD_REMEMBER_HASH, token))
            .await
    }

    async fn create(&self, user: &mut User) -> Result<(), Error> {
        if user.id.is_nil() {
            user.id = UserId::random();
        }
        let now = self.clock.utc();
        user.created_at = now;
        user.updated_at = now;

        let document = documents::encode(user).map_err(map_store_error)?;
        self.store
            .insert_one(USERS_COLLECTION, document)
            .await
            .map_err(map_store_error)
    }

    async fn update(&self, user: &mut User) -> Result<(), Error> {
        user.updated_at = self.clock.utc();

        let document = documents::encode(user).map_err(map_store_error)?;
        self.store
            .update_one(
                USERS_COLLECTION,
                &Filter::by(FIELD_ID, user.id.to_string()),
                document,
            )
            .await
            .map_err(map_store_error)
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        self.store
            .delete_one(USERS_COLLECTION, &Filter::by(FIELD_ID, id.to_string()))
            .await
            .map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::{DateTime, Local, TimeZone, Utc};

    use super::*;
    use crate::outbound::persistence::MemoryStore;

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn fixture_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).single().expect("valid timestamp")
    }

    fn repository() -> StoreUserRepository {
        StoreUserRepository::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixtureClock {
                utc_now: fixture_timestamp(),
            }),
        )
    }

    fn stored_candidate() -> User {
        let mut user = User::new("Michael Scott", "michael@dundermifflin.com", "");
        user.password_hash = "phc".to_owned();
        user.remember_hash = "digest".to_owned();
        user
    }

    #[tokio::test]
    async fn create_backfills_id_and_timestamps() {
        let repo = repository();
        let mut user = stored_candidate();

        repo.create(&mut user).await.expect("create succeeds");

        assert!(!user.id.is_nil());
        assert_eq!(user.created_at, fixture_timestamp());
        assert_eq!(user.updated_at, fixture_timestamp());

        let found = repo.find_by_id(&user.id).await.expect("lookup runs");
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn lookups_without_a_match_return_none() {
        let repo = repository();
        assert!(
            repo.find_by_id(&UserId::random())
                .await
                .expect("lookup runs")
                .is_none()
        );
        assert!(
            repo.find_by_email("nobody@dundermifflin.com")
                .await
                .expect("lookup runs")
                .is_none()
        );
        assert!(
            repo.find_by_remember("digest")
                .await
                .expect("lookup runs")
                .is_none()
        );
    }

    #[tokio::test]
    async fn find_by_remember_matches_the_stored_digest() {
        let repo = repository();
        let mut user = stored_candidate();
        repo.create(&mut user).await.expect("create succeeds");

        let found = repo
            .find_by_remember("digest")
            .await
            .expect("lookup runs")
            .expect("digest matches");
        assert_eq!(found.id, user.id);
    }

    #[tokio::test]
    async fn update_replaces_the_stored_record() {
        let repo = repository();
        let mut user = stored_candidate();
        repo.create(&mut user).await.expect("create succeeds");

        user.name = "Michael Gary Scott".to_owned();
        repo.update(&mut user).await.expect("update succeeds");

        let found = repo
            .find_by_id(&user.id)
            .await
            .expect("lookup runs")
            .expect("record exists");
        assert_eq!(found.name, "Michael Gary Scott");
    }

    #[tokio::test]
    async fn delete_then_lookup_returns_none() {
        let repo = repository();
        let mut user = stored_candidate();
        repo.create(&mut user).await.expect("create succeeds");

        repo.delete(&user.id).await.expect("delete succeeds");
        assert!(
            repo.find_by_id(&user.id)
                .await
                .expect("lookup runs")
                .is_none()
        );
    }
}
