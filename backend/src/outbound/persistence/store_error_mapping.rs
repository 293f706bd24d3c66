//! Shared mapping from record-store failures to the domain error.

use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::StoreError;

/// Log the adapter-level failure, then wrap it opaquely. The payload is
/// never reinterpreted on the way up.
pub(super) fn map_store_error(error: StoreError) -> Error {
    debug!(error = %error, "record store operation failed");
    Error::store(error.to_string())
}
