//! User account entity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier backed by a UUID.
///
/// A freshly constructed record carries the nil UUID until the raw
/// persistence layer assigns a real one on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
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

impl Default for UserId {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Application user account.
///
/// The `password` and `remember` fields hold caller-supplied plaintext
/// only while a create or update travels through the validator, which
/// hashes and zeroizes them before the record reaches the store. Serde
/// renames pin the persisted document field names (`_id`, `passwordHash`,
/// `rememberHash`).
///
/// ## Invariants
/// - `password_hash` is non-empty after any create, and after any update
///   that supplied a password.
/// - `remember_hash` is non-empty after any create or update.
/// - `email` is lowercased, trimmed, and unique across users.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier, assigned on create.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Transient plaintext password; cleared by the validator.
    #[serde(default)]
    pub password: String,
    /// Persisted password hash (PHC string over password + pepper).
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    /// Transient plaintext remember token; cleared by the validator.
    #[serde(default)]
    pub remember: String,
    /// Persisted keyed hash of the remember token.
    #[serde(rename = "rememberHash")]
    pub remember_hash: String,
    /// Creation timestamp, assigned on create.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, refreshed on every write.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a candidate user for creation.
    ///
    /// Identifier and timestamps stay at their placeholder values until
    /// the persistence layer backfills them.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: UserId::nil(),
            name: String::new(),
            email: String::new(),
            password: String::new(),
            password_hash: String::new(),
            remember: String::new(),
            remember_hash: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }
}

// Plaintext credential fields stay out of debug output.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_hash", &"<redacted>")
            .field("remember", &"<redacted>")
            .field("remember_hash", &self.remember_hash)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_users_start_unassigned() {
        let user = User::new("Michael Scott", "michael@dundermifflin.com", "longenough1");
        assert!(user.id.is_nil());
        assert_eq!(user.created_at, DateTime::UNIX_EPOCH);
        assert_eq!(user.password, "longenough1");
        assert!(user.password_hash.is_empty());
    }

    #[rstest]
    fn document_field_names_match_the_store_contract() {
        let mut user = User::new("Michael Scott", "michael@dundermifflin.com", "");
        user.id = UserId::random();
        let value = serde_json::to_value(&user).expect("users serialize");
        let document = value.as_object().expect("users serialize to objects");

        for field in [
            "_id",
            "name",
            "email",
            "password",
            "passwordHash",
            "remember",
            "rememberHash",
            "created_at",
            "updated_at",
        ] {
            assert!(document.contains_key(field), "missing field {field}");
        }
        assert_eq!(document.len(), 9);
    }

    #[rstest]
    fn serialized_id_is_the_uuid_string() {
        let mut user = User::default();
        user.id = UserId::random();
        let value = serde_json::to_value(&user).expect("users serialize");
        assert_eq!(value["_id"], serde_json::json!(user.id.to_string()));
    }

    #[rstest]
    fn debug_redacts_credential_fields() {
        let user = User::new("Michael Scott", "michael@dundermifflin.com", "hunter22aa");
        let rendered = format!("{user:?}");
        assert!(!rendered.contains("hunter22aa"));
        assert!(rendered.contains("michael@dundermifflin.com"));
    }
}
