//! Record-store persistence adapters.
//!
//! This module provides the raw data-access layer: thin adapters that
//! translate entity operations into [`RecordStore`] calls, assign ids
//! and timestamps, and map store failures into the domain error. No
//! business logic resides here; validation lives in the decorator layer
//! above.
//!
//! The production store driver is supplied by the embedding application.
//! [`MemoryStore`] is the bundled reference implementation used by tests
//! and demos.
//!
//! [`RecordStore`]: crate::domain::ports::RecordStore

mod documents;
mod memory;
mod store_error_mapping;
mod store_gallery_repository;
mod store_user_repository;

pub use memory::MemoryStore;
pub use store_gallery_repository::StoreGalleryRepository;
pub use store_user_repository::StoreUserRepository;
