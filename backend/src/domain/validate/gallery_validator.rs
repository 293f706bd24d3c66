//! Gallery validation decorator.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::{Error, ValidationError};
use crate::domain::gallery::{Gallery, GalleryId};
use crate::domain::ports::GalleryRepository;
use crate::domain::user::UserId;

/// A single gallery validation step.
pub(crate) type GalleryCheck = fn(&GalleryValidator, &mut Gallery) -> Result<(), Error>;

/// Ordered checks shared by gallery create and update.
pub(crate) const GALLERY_CHECKS: &[GalleryCheck] = &[
    GalleryValidator::owner_required,
    GalleryValidator::title_required,
];

/// Validating decorator over a [`GalleryRepository`].
pub struct GalleryValidator {
    inner: Arc<dyn GalleryRepository>,
}

impl GalleryValidator {
    /// Wrap an inner repository with validation.
    pub fn new(inner: Arc<dyn GalleryRepository>) -> Self {
        Self { inner }
    }

    fn run_checks(&self, gallery: &mut Gallery, checks: &[GalleryCheck]) -> Result<(), Error> {
        for check in checks {
            check(self, gallery)?;
        }
        Ok(())
    }

    fn owner_required(&self, gallery: &mut Gallery) -> Result<(), Error> {
        if gallery.user_id.is_nil() {
            return Err(ValidationError::OwnerRequired.into());
        }
        Ok(())
    }

    fn title_required(&self, gallery: &mut Gallery) -> Result<(), Error> {
        if gallery.title.is_empty() {
            return Err(ValidationError::TitleRequired.into());
        }
        Ok(())
    }
}

#[async_trait]
impl GalleryRepository for GalleryValidator {
    async fn find_by_id(&self, id: &GalleryId) -> Result<Option<Gallery>, Error> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Gallery>, Error> {
        self.inner.find_by_owner(owner).await
    }

    async fn create(&self, gallery: &mut Gallery) -> Result<(), Error> {
        self.run_checks(gallery, GALLERY_CHECKS)?;
        self.inner.create(gallery).await
    }

    async fn update(&self, gallery: &mut Gallery) -> Result<(), Error> {
        self.run_checks(gallery, GALLERY_CHECKS)?;
        self.inner.update(gallery).await
    }

    async fn delete(&self, id: &GalleryId) -> Result<(), Error> {
        self.inner.delete(id).await
    }
}
