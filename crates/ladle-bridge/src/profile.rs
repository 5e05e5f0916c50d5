//! The profile record attached to each auth user.

use serde::{Deserialize, Serialize};

/// A row of the `profile` collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Matches the auth user's id.
    pub id: String,
    pub username: Option<String>,
    pub fullname: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The write shape used right after sign-up.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpsert {
    pub id: String,
    pub username: String,
    pub fullname: String,
}
