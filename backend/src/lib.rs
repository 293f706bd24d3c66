//! Layered data-access crate for a photo-gallery web application.
//!
//! Manages user accounts and galleries against a pluggable record
//! store. Three layers implement the same repository port and compose
//! transparently: the raw store-backed layer
//! ([`outbound::persistence`]), the validation/normalization decorators
//! ([`domain::validate`]), and the entity services ([`domain::service`])
//! that form the caller-facing surface. [`compose`] wires the standard
//! chain.

pub mod compose;
pub mod config;
pub mod domain;
pub mod outbound;
pub mod secrets;
