//! User account types.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, Result};

/// Unique identifier for a user.
pub type UserId = u64;

/// A user account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique username (lowercase, alphanumeric with hyphens).
    pub username: String,
    /// Display name (can contain any characters).
    pub display_name: Option<String>,
    /// Unix timestamp when created.
    pub created_at: u64,
}

impl User {
    /// Create a new user.
    pub fn new(id: UserId, username: String, display_name: Option<String>) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        Self {
            id,
            username,
            display_name,
            created_at: now,
        }
    }

    /// The string shown for this user in rendered pages: the display name
    /// when set, the username otherwise.
    pub fn display(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// Validate a username format.
    ///
    /// Usernames must:
    /// - Be 1-39 characters long
    /// - Start with an alphanumeric character
    /// - Contain only lowercase alphanumeric characters and hyphens
    /// - Not contain consecutive hyphens
    /// - Not end with a hyphen
    pub fn validate_username(username: &str) -> Result<()> {
        if username.is_empty() {
            return Err(AuthError::InvalidInput("username cannot be empty".into()));
        }

        if username.len() > 39 {
            return Err(AuthError::InvalidInput(
                "username must be 39 characters or less".into(),
            ));
        }

        let chars: Vec<char> = username.chars().collect();

        if !chars[0].is_ascii_alphanumeric() {
            return Err(AuthError::InvalidInput(
                "username must start with an alphanumeric character".into(),
            ));
        }

        for c in &chars {
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '-' {
                return Err(AuthError::InvalidInput(
                    "username may only contain lowercase alphanumeric characters and hyphens"
                        .into(),
                ));
            }
        }

        if username.contains("--") {
            return Err(AuthError::InvalidInput(
                "username may not contain consecutive hyphens".into(),
            ));
        }

        if username.ends_with('-') {
            return Err(AuthError::InvalidInput(
                "username may not end with a hyphen".into(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
