//! User domain models.

use serde::{Deserialize, Serialize};

/// A registered portal member.
///
/// `phone` acts as the de-facto login key. `is_admin` marks buyer accounts;
/// everyone else is a farmer. The password is stored and compared in
/// plaintext, a legacy behavior kept for compatibility with existing rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub password: String,
    pub is_admin: bool,
}

/// Input model for registering a new user.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Partial update for a user.
///
/// The fields listed here are the allow-list of mutable columns; unknown
/// keys are rejected at deserialization, which keeps `id` immutable.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}
