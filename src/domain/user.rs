//! Registered players.

use crate::domain::UserId;
use serde::{Deserialize, Serialize};

/// A registered user as exposed over the API. The password digest never
/// leaves the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
}

/// Registration payload for a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: &str, password: &str, name: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// SHA-256 digest of the password, salted with the username.
    pub fn password_digest(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.username.as_bytes());
        hasher.update(b":");
        hasher.update(self.password.as_bytes());
        hex::encode(hasher.finalize())
    }
}
