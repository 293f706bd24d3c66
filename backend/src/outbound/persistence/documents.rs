//! Conversions between entity records and store documents.
//!
//! Documents are internal to the persistence layer; the domain only sees
//! entities. Field-name constants pin the filterable document fields to
//! the serde renames on the entity types.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ports::{Document, StoreError};

/// Identifier field shared by both collections.
pub(super) const FIELD_ID: &str = "_id";
/// Normalized email field on user documents.
pub(super) const FIELD_EMAIL: &str = "email";
/// Remember-token digest field on user documents.
pub(super) const FIELD_REMEMBER_HASH: &str = "rememberHash";
/// Owning-user field on gallery documents.
pub(super) const FIELD_OWNER: &str = "UserID";

pub(super) fn encode<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(_) => Err(StoreError::serialization(
            "record did not serialise to an object",
        )),
        Err(err) => Err(StoreError::serialization(err.to_string())),
    }
}

pub(super) fn decode<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(document))
        .map_err(|err| StoreError::serialization(err.to_string()))
}
