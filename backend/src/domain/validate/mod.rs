//! Validation and normalization layer.
//!
//! [`UserValidator`] and [`GalleryValidator`] wrap an inner repository
//! and implement the identical repository port, so they decorate the raw
//! persistence layer transparently. Create and update run a fixed,
//! ordered list of field checks against the candidate record before
//! delegating; the first failing check aborts the call without touching
//! the inner layer. Delete passes through unvalidated for both entities.

mod gallery_validator;
mod user_validator;

pub use gallery_validator::GalleryValidator;
pub use user_validator::UserValidator;

/// Normalize an email address for storage and lookup: trim surrounding
/// whitespace and lowercase.
pub(crate) fn normalized_email(email: &str) -> String {
    email.trim().to_lowercase()
}
