//! Gallery service: pure delegation to the validated repository chain.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::gallery::{Gallery, GalleryId};
use crate::domain::ports::GalleryRepository;
use crate::domain::user::UserId;

/// Gallery entity service.
///
/// Galleries need no entity-level behaviour beyond validation, so every
/// method delegates to the wrapped chain.
pub struct GalleryService {
    repository: Arc<dyn GalleryRepository>,
}

impl GalleryService {
    /// Wrap a repository chain (normally the validator over the raw
    /// store layer; see [`crate::compose::gallery_service`] for the
    /// standard wiring).
    pub fn new(repository: Arc<dyn GalleryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GalleryRepository for GalleryService {
    async fn find_by_id(&self, id: &GalleryId) -> Result<Option<Gallery>, Error> {
        self.repository.find_by_id(id).await
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Gallery>, Error> {
        self.repository.find_by_owner(owner).await
    }

    async fn create(&self, gallery: &mut Gallery) -> Result<(), Error> {
        self.repository.create(gallery).await
    }

    async fn update(&self, gallery: &mut Gallery) -> Result<(), Error> {
        self.repository.update(gallery).await
    }

    async fn delete(&self, id: &GalleryId) -> Result<(), Error> {
        self.repository.delete(id).await
    }
}
