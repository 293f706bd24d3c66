//! Entity services: the public caller surface of the crate.
//!
//! Services wrap an already-validating repository chain and add the
//! entity-level behaviour that is not expressible as field validation —
//! credential verification for users. Everything else delegates straight
//! through, so a service satisfies the same repository port as the
//! layers beneath it.

mod gallery_service;
mod user_service;

pub use gallery_service::GalleryService;
pub use user_service::UserService;
