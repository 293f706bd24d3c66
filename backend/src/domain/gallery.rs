//! Gallery entity: a titled, ordered collection of images owned by a
//! user.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Stable gallery identifier backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryId(Uuid);

impl GalleryId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil identifier used by not-yet-persisted records.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the nil identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GalleryId {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Embedded reference to an image stored alongside its gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Stored filename of the image.
    pub filename: String,
}

/// Named, ordered collection of images owned by a user.
///
/// Serde renames pin the persisted document field names (`_id`, `UserID`,
/// `Title`, `Images`).
///
/// ## Invariants
/// - `title` is non-empty.
/// - `user_id` is a non-nil owner identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    /// Stable identifier, assigned on create.
    #[serde(rename = "_id")]
    pub id: GalleryId,
    /// Owning user.
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    /// Gallery title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Ordered embedded image references.
    #[serde(rename = "Images", default)]
    pub images: Vec<Image>,
    /// Creation timestamp, assigned on create.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, refreshed on every write.
    pub updated_at: DateTime<Utc>,
}

impl Gallery {
    /// Build a candidate gallery for creation.
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            user_id,
            ..Self::default()
        }
    }

    /// Distribute the images across `columns` buckets round-robin,
    /// preserving order within each bucket.
    ///
    /// Returns no buckets when `columns` is zero.
    pub fn images_split(&self, columns: usize) -> Vec<Vec<Image>> {
        if columns == 0 {
            return Vec::new();
        }
        let mut buckets = vec![Vec::new(); columns];
        for (index, image) in self.images.iter().enumerate() {
            if let Some(bucket) = buckets.get_mut(index % columns) {
                bucket.push(image.clone());
            }
        }
        buckets
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            id: GalleryId::nil(),
            user_id: UserId::nil(),
            title: String::new(),
            images: Vec::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn gallery_with_images(count: usize) -> Gallery {
        let mut gallery = Gallery::new(UserId::random(), "Holiday");
        gallery.images = (0..count)
            .map(|index| Image {
                filename: format!("img-{index}.jpg"),
            })
            .collect();
        gallery
    }

    #[rstest]
    fn document_field_names_match_the_store_contract() {
        let gallery = gallery_with_images(1);
        let value = serde_json::to_value(&gallery).expect("galleries serialize");
        let document = value.as_object().expect("galleries serialize to objects");

        for field in ["_id", "UserID", "Title", "Images", "created_at", "updated_at"] {
            assert!(document.contains_key(field), "missing field {field}");
        }
        assert_eq!(document.len(), 6);
    }

    #[rstest]
    #[case(5, 2, &[3, 2])]
    #[case(6, 3, &[2, 2, 2])]
    #[case(2, 4, &[1, 1, 0, 0])]
    #[case(0, 3, &[0, 0, 0])]
    fn images_split_distributes_round_robin(
        #[case] images: usize,
        #[case] columns: usize,
        #[case] expected: &[usize],
    ) {
        let gallery = gallery_with_images(images);
        let buckets = gallery.images_split(columns);
        let sizes: Vec<usize> = buckets.iter().map(Vec::len).collect();
        assert_eq!(sizes, expected);
    }

    #[rstest]
    fn images_split_preserves_order_within_buckets() {
        let gallery = gallery_with_images(4);
        let buckets = gallery.images_split(2);
        let first: Vec<&str> = buckets
            .first()
            .map(|bucket| bucket.iter().map(|img| img.filename.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(first, ["img-0.jpg", "img-2.jpg"]);
    }

    #[rstest]
    fn images_split_with_zero_columns_is_empty() {
        assert!(gallery_with_images(3).images_split(0).is_empty());
    }
}
