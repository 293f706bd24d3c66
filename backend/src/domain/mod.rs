//! Domain types, ports, and services.
//!
//! Purpose: define the entities, the shared repository ports the layers
//! compose over, the validation decorators, and the entity services that
//! form the crate's public surface. Keep invariants and serialisation
//! contracts (serde) documented on each type.
//!
//! Public surface:
//! - [`User`] / [`Gallery`] — entity records with their id newtypes.
//! - [`Error`] / [`ValidationError`] — the error taxonomy.
//! - [`ports`] — `RecordStore` plus the shared repository interfaces.
//! - [`UserValidator`] / [`GalleryValidator`] — decorator layer.
//! - [`UserService`] / [`GalleryService`] — caller-facing services.

pub mod error;
pub mod gallery;
pub mod ports;
pub mod service;
pub mod user;
pub mod validate;

pub use self::error::{Error, ValidationError};
pub use self::gallery::{Gallery, GalleryId, Image};
pub use self::service::{GalleryService, UserService};
pub use self::user::{User, UserId};
pub use self::validate::{GalleryValidator, UserValidator};
