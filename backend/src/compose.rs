//! Composition helpers wiring the standard layer chain.
//!
//! Each helper builds the full decorator stack over a record store:
//! raw repository → validator → service. Embedding applications that
//! need a custom chain can assemble the layers directly; these cover
//! the common case.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::config::Secrets;
use crate::domain::ports::RecordStore;
use crate::domain::{GalleryService, GalleryValidator, UserService, UserValidator};
use crate::outbound::persistence::{StoreGalleryRepository, StoreUserRepository};
use crate::secrets::KeyedHasher;

/// Build a [`UserService`] over the given store with the system clock.
pub fn user_service(store: Arc<dyn RecordStore>, secrets: &Secrets) -> UserService {
    user_service_with_clock(store, secrets, Arc::new(DefaultClock))
}

/// Build a [`UserService`] with an injected clock.
pub fn user_service_with_clock(
    store: Arc<dyn RecordStore>,
    secrets: &Secrets,
    clock: Arc<dyn Clock>,
) -> UserService {
    let repository = Arc::new(StoreUserRepository::new(store, clock));
    let validator = Arc::new(UserValidator::new(
        repository,
        KeyedHasher::new(secrets.hmac_key()),
        secrets.pepper(),
    ));
    UserService::new(validator, secrets.pepper())
}

/// Build a [`GalleryService`] over the given store with the system
/// clock.
pub fn gallery_service(store: Arc<dyn RecordStore>) -> GalleryService {
    gallery_service_with_clock(store, Arc::new(DefaultClock))
}

/// Build a [`GalleryService`] with an injected clock.
pub fn gallery_service_with_clock(
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
) -> GalleryService {
    let repository = Arc::new(StoreGalleryRepository::new(store, clock));
    let validator = Arc::new(GalleryValidator::new(repository));
    GalleryService::new(validator)
}
