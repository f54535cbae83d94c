use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
///
/// Profiles are stored under the uid issued by the identity provider, so the
/// id is a string rather than a counter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(format!("user_{}", id))
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Profile of a registered user.
///
/// # Document Store
/// This struct implements the [`Document`](docstore::Document) trait,
/// allowing it to be managed by a [`DocumentActor`](docstore::DocumentActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Grants catalog management.
    #[serde(default)]
    pub is_admin: bool,
}

/// Payload for creating a profile.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

/// Payload for updating an existing profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub is_admin: Option<bool>,
}

impl User {
    pub fn new(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            email: params.email,
            name: params.name,
            is_admin: params.is_admin,
        }
    }
}
