//! Session types and token generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::user::UserId;

/// Session token length in random bytes (hex-encoded to twice this).
const SESSION_TOKEN_BYTES: usize = 32;

/// Default session lifetime: 24 hours.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// A signed-in session held by the store.
///
/// The token doubles as the session's identity and is the only thing the
/// browser holds; it is random, never derived from user data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session token (64 lowercase hex characters).
    pub token: String,
    /// User this session belongs to.
    pub user_id: UserId,
    /// Unix timestamp when created.
    pub created_at: u64,
    /// Unix timestamp after which the session is invalid.
    pub expires_at: u64,
}

impl Session {
    /// Create a new session for a user with a fresh random token.
    pub fn generate(user_id: UserId, ttl_secs: u64) -> Self {
        let now = unix_now();
        Self {
            token: generate_session_token(),
            user_id,
            created_at: now,
            expires_at: now.saturating_add(ttl_secs),
        }
    }

    /// Whether the session has expired as of `now` (Unix seconds).
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}

/// Generate a cryptographically random session token.
pub fn generate_session_token() -> String {
    let bytes: [u8; SESSION_TOKEN_BYTES] = rand::thread_rng().gen();
    hex::encode(bytes)
}

/// Current Unix time in seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
