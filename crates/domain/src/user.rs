//! User — the single persisted record: a name, an age, and a location.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Free-form location text.
    pub location: String,
}

impl User {
    /// Assemble a stored user from its identifier and field values.
    #[must_use]
    pub fn from_payload(id: UserId, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            age: payload.age,
            location: payload.location,
        }
    }

    /// The mutable fields of this user, without the identifier.
    #[must_use]
    pub fn payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.clone(),
            age: self.age,
            location: self.location.clone(),
        }
    }
}

/// Field values for creating a user or overwriting an existing one.
///
/// The identifier is never part of the payload: the store assigns it on
/// insert, and updates address the row by path. An `id` key present in a
/// JSON body is ignored. Omitted `age` and `location` fall back to zero
/// values; `name` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// Display name. Required.
    pub name: String,
    /// Age in years, `0` when omitted.
    #[serde(default)]
    pub age: i64,
    /// Free-form location text, empty when omitted.
    #[serde(default)]
    pub location: String,
}

impl UserPayload {
    /// Build a payload from its three field values.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            location: location.into(),
        }
    }
}
