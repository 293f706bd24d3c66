//! End-to-end coverage of the gallery data-access chain over the
//! in-memory store.

use std::sync::Arc;

use backend::compose;
use backend::config::Secrets;
use backend::domain::ports::{GalleryRepository, UserRepository};
use backend::domain::{Error, Gallery, GalleryService, Image, User, UserId, ValidationError};
use backend::outbound::persistence::MemoryStore;

fn service() -> GalleryService {
    compose::gallery_service(Arc::new(MemoryStore::new()))
}

fn validation_error(error: Error) -> ValidationError {
    match error {
        Error::Validation(reason) => reason,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_then_lookup_round_trips_with_backfilled_fields() {
    let service = service();
    let mut gallery = Gallery::new(UserId::random(), "Holiday");
    gallery.images = vec![
        Image {
            filename: "one.jpg".to_owned(),
        },
        Image {
            filename: "two.jpg".to_owned(),
        },
    ];

    service
        .create(&mut gallery)
        .await
        .expect("valid gallery creates");

    let found = service
        .find_by_id(&gallery.id)
        .await
        .expect("lookup runs")
        .expect("record exists");
    assert_eq!(found, gallery);
    assert!(!found.id.is_nil());
    assert_eq!(found.images.len(), 2);
}

#[tokio::test]
async fn create_requires_a_title() {
    let service = service();
    let mut gallery = Gallery::new(UserId::random(), "");

    let err = service.create(&mut gallery).await.expect_err("must fail");
    assert_eq!(validation_error(err), ValidationError::TitleRequired);
}

#[tokio::test]
async fn create_requires_an_owner() {
    let service = service();
    let mut gallery = Gallery::new(UserId::nil(), "Holiday");

    let err = service.create(&mut gallery).await.expect_err("must fail");
    assert_eq!(validation_error(err), ValidationError::OwnerRequired);
}

#[tokio::test]
async fn find_by_owner_lists_only_that_owners_galleries() {
    let service = service();
    let owner = UserId::random();
    let other = UserId::random();

    let mut beach = Gallery::new(owner, "Beach");
    let mut city = Gallery::new(owner, "City");
    let mut foreign = Gallery::new(other, "Foreign");
    service.create(&mut beach).await.expect("create succeeds");
    service.create(&mut foreign).await.expect("create succeeds");
    service.create(&mut city).await.expect("create succeeds");

    let found = service.find_by_owner(&owner).await.expect("lookup runs");
    let titles: Vec<_> = found.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Beach", "City"]);
}

#[tokio::test]
async fn update_replaces_the_full_record() {
    let service = service();
    let mut gallery = Gallery::new(UserId::random(), "Holiday");
    gallery.images = vec![Image {
        filename: "one.jpg".to_owned(),
    }];
    service.create(&mut gallery).await.expect("create succeeds");

    gallery.title = "Winter Holiday".to_owned();
    gallery.images = Vec::new();
    service.update(&mut gallery).await.expect("update succeeds");

    let found = service
        .find_by_id(&gallery.id)
        .await
        .expect("lookup runs")
        .expect("record exists");
    assert_eq!(found.title, "Winter Holiday");
    assert!(found.images.is_empty());
    assert!(found.updated_at >= found.created_at);
}

#[tokio::test]
async fn update_validates_like_create() {
    let service = service();
    let mut gallery = Gallery::new(UserId::random(), "Holiday");
    service.create(&mut gallery).await.expect("create succeeds");

    gallery.title = String::new();
    let err = service.update(&mut gallery).await.expect_err("must fail");
    assert_eq!(validation_error(err), ValidationError::TitleRequired);
}

#[tokio::test]
async fn delete_then_lookup_returns_none() {
    let service = service();
    let mut gallery = Gallery::new(UserId::random(), "Holiday");
    service.create(&mut gallery).await.expect("create succeeds");

    service.delete(&gallery.id).await.expect("delete succeeds");
    assert!(
        service
            .find_by_id(&gallery.id)
            .await
            .expect("lookup runs")
            .is_none()
    );
}

#[tokio::test]
async fn deleting_a_user_does_not_cascade_to_galleries() {
    // Both services share one store; removing the owner leaves the
    // gallery untouched.
    let store = Arc::new(MemoryStore::new());
    let users = compose::user_service(store.clone(), &Secrets::new("pepper", "hmac-key"));
    let galleries = compose::gallery_service(store);

    let mut owner = User::new("Michael Scott", "michael@dundermifflin.com", "longenough1");
    users.create(&mut owner).await.expect("owner creates");

    let mut gallery = Gallery::new(owner.id, "Holiday");
    galleries
        .create(&mut gallery)
        .await
        .expect("gallery creates");

    users.delete(&owner.id).await.expect("owner deletes");

    let found = galleries
        .find_by_owner(&owner.id)
        .await
        .expect("lookup runs");
    assert_eq!(found.len(), 1);
}
