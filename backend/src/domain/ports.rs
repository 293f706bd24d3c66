//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven
//! adapters. [`RecordStore`] is the boundary to the persistent document
//! store; [`UserRepository`] and [`GalleryRepository`] are the shared
//! entity interfaces that the raw persistence layer, the validator layer,
//! and the services all implement, so the layers compose transparently
//! behind `Arc<dyn …>`.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use super::error::Error;
use super::gallery::{Gallery, GalleryId};
use super::user::{User, UserId};

/// Collection name for user records.
pub const USERS_COLLECTION: &str = "users";
/// Collection name for gallery records.
pub const GALLERIES_COLLECTION: &str = "galleries";

/// A record as stored: a JSON object keyed by document field names.
pub type Document = Map<String, Value>;

/// Equality filter over named document fields.
///
/// All terms must match for a document to be selected. Store adapters
/// translate the terms into their native query form; the bundled
/// in-memory store evaluates them directly via [`Filter::matches`].
///
/// # Examples
/// ```
/// use backend::domain::ports::Filter;
///
/// let filter = Filter::by("email", "ada@example.com").and("name", "Ada");
/// assert_eq!(filter.terms().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Vec<(String, Value)>);

impl Filter {
    /// Start a filter with a single equality term.
    pub fn by(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(vec![(field.into(), value.into())])
    }

    /// Add a further equality term.
    #[must_use]
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((field.into(), value.into()));
        self
    }

    /// The equality terms in insertion order.
    pub fn terms(&self) -> &[(String, Value)] {
        &self.0
    }

    /// Whether every term matches the given document.
    pub fn matches(&self, document: &Document) -> bool {
        self.0
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }
}

/// Errors surfaced by record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store backend is unavailable or rejected the operation.
    #[error("store backend failure: {message}")]
    Backend { message: String },
    /// A record could not be serialised or deserialised.
    #[error("store serialisation failed: {message}")]
    Serialization { message: String },
}

impl StoreError {
    /// Helper for backend-level failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Helper for serialisation problems.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Persistence port for the underlying document store.
///
/// Operations are scoped to a named collection. Lookups that match no
/// record succeed with an empty result; `update_one` and `delete_one`
/// are no-ops when nothing matches. The store is the sole source of
/// truth and offers no multi-record atomicity.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the first document matching the filter.
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError>;

    /// Fetch all documents matching the filter, in store-native order.
    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError>;

    /// Insert a new document.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError>;

    /// Replace the first document matching the filter.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        document: Document,
    ) -> Result<(), StoreError>;

    /// Delete the first document matching the filter.
    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<(), StoreError>;
}

/// Shared user data-access interface.
///
/// Implemented identically by the raw store layer, the validator layer,
/// and the user service. Lookups return `Ok(None)` when no record
/// matches; any other store failure propagates unchanged as
/// [`Error::Store`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, Error>;

    /// Fetch a user by email address.
    ///
    /// Validating layers normalize the address before delegating, so
    /// callers may pass raw input.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// Fetch a user by remember token.
    ///
    /// Validating layers hash the token before delegating; the raw layer
    /// expects the stored digest form.
    async fn find_by_remember(&self, token: &str) -> Result<Option<User>, Error>;

    /// Persist a new user, backfilling id and timestamps.
    async fn create(&self, user: &mut User) -> Result<(), Error>;

    /// Replace the stored record matching the user's id.
    async fn update(&self, user: &mut User) -> Result<(), Error>;

    /// Delete the user with the given identifier.
    async fn delete(&self, id: &UserId) -> Result<(), Error>;
}

/// Shared gallery data-access interface.
///
/// Same layering contract as [`UserRepository`].
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Fetch a gallery by identifier.
    async fn find_by_id(&self, id: &GalleryId) -> Result<Option<Gallery>, Error>;

    /// Fetch all galleries owned by the given user, in store-native
    /// order.
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Gallery>, Error>;

    /// Persist a new gallery, backfilling id and timestamps.
    async fn create(&self, gallery: &mut Gallery) -> Result<(), Error>;

    /// Replace the stored record matching the gallery's id.
    async fn update(&self, gallery: &mut Gallery) -> Result<(), Error>;

    /// Delete the gallery with the given identifier.
    async fn delete(&self, id: &GalleryId) -> Result<(), Error>;
}
