//! Record-store-backed [`GalleryRepository`] implementation.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::error::Error;
use crate::domain::gallery::{Gallery, GalleryId};
use crate::domain::ports::{Filter, GALLERIES_COLLECTION, GalleryRepository, RecordStore};
use crate::domain::user::UserId;

use super::documents::{self, FIELD_ID, FIELD_OWNER};
use super::store_error_mapping::map_store_error;

/// Raw gallery data-access layer over the `galleries` collection.
pub struct StoreGalleryRepository {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
}

impl StoreGalleryRepository {
    /// Create a repository over the given store and clock.
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl GalleryRepository for StoreGalleryRepository {
    async fn find_by_id(&self, id: &GalleryId) -> Result<Option<Gallery>, Error> {
        let document = self
            .store
            .find_one(GALLERIES_COLLECTION, &Filter::by(FIELD_ID, id.to_string()))
            .await
            .map_err(map_store_error)?;
        document
            .map(documents::decode)
            .transpose()
            .map_err(map_store_error)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Gallery>, Error> {
        let found = self
            .store
            .find_many(
                GALLERIES_COLLECTION,
                &Filter::by(FIELD_OWNER, owner.to_string()),
            )
            .await
            .map_err(map_store_error)?;
        found
            .into_iter()
            .map(|document| documents::decode(document).map_err(map_store_error))
            .collect()
    }

    async fn create(&self, gallery: &mut Gallery) -> Result<(), Error> {
        if gallery.id.is_nil() {
            gallery.id = GalleryId::random();
        }
        let now = self.clock.utc();
        gallery.created_at = now;
        gallery.updated_at = now;

        let document = documents::encode(gallery).map_err(map_store_error)?;
        self.store
            .insert_one(GALLERIES_COLLECTION, document)
            .await
            .map_err(map_store_error)
    }

    /// Full-record replacement: the stored document is overwritten with
    /// the candidate as a whole, not patched.
    async fn update(&self, gallery: &mut Gallery) -> Result<(), Error> {
        gallery.updated_at = self.clock.utc();

        let document = documents::encode(gallery).map_err(map_store_error)?;
        self.store
            .update_one(
                GALLERIES_COLLECTION,
                &Filter::by(FIELD_ID, gallery.id.to_string()),
                document,
            )
            .await
            .map_err(map_store_error)
    }

    async fn delete(&self, id: &GalleryId) -> Result<(), Error> {
        self.store
            .delete_one(GALLERIES_COLLECTION, &Filter::by(FIELD_ID, id.to_string()))
            .await
            .map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::{DateTime, Local, TimeZone, Utc};

    use super::*;
    use crate::domain::Image;
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

    fn repository() -> StoreGalleryRepository {
        StoreGalleryRepository::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FixtureClock {
                utc_now: fixture_timestamp(),
            }),
        )
    }

    #[tokio::test]
    async fn create_backfills_id_and_timestamps() {
        let repo = repository();
        let mut gallery = Gallery::new(UserId::random(), "Holiday");

        repo.create(&mut gallery).await.expect("create succeeds");

        assert!(!gallery.id.is_nil());
        assert_eq!(gallery.created_at, fixture_timestamp());

        let found = repo.find_by_id(&gallery.id).await.expect("lookup runs");
        assert_eq!(found, Some(gallery));
    }

    #[tokio::test]
    async fn find_by_owner_returns_only_that_owner_in_insertion_order() {
        let repo = repository();
        let owner = UserId::random();
        let other = UserId::random();

        let mut first = Gallery::new(owner, "First");
        let mut second = Gallery::new(owner, "Second");
        let mut foreign = Gallery::new(other, "Foreign");
        repo.create(&mut first).await.expect("create succeeds");
        repo.create(&mut foreign).await.expect("create succeeds");
        repo.create(&mut second).await.expect("create succeeds");

        let found = repo.find_by_owner(&owner).await.expect("lookup runs");
        let titles: Vec<_> = found.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[tokio::test]
    async fn update_replaces_the_whole_record() {
        let repo = repository();
        let mut gallery = Gallery::new(UserId::random(), "Holiday");
        gallery.images = vec![Image {
            filename: "one.jpg".to_owned(),
        }];
        repo.create(&mut gallery).await.expect("create succeeds");

        gallery.title = "Winter Holiday".to_owned();
        gallery.images = Vec::new();
        repo.update(&mut gallery).await.expect("update succeeds");

        let found = repo
            .find_by_id(&gallery.id)
            .await
            .expect("lookup runs")
            .expect("record exists");
        assert_eq!(found.title, "Winter Holiday");
        assert!(found.images.is_empty());
    }

    #[tokio::test]
    async fn delete_then_lookup_returns_none() {
        let repo = repository();
        let mut gallery = Gallery::new(UserId::random(), "Holiday");
        repo.create(&mut gallery).await.expect("create succeeds");

        repo.delete(&gallery.id).await.expect("delete succeeds");
        assert!(
            repo.find_by_id(&gallery.id)
                .await
                .expect("lookup runs")
                .is_none()
        );
    }
}
