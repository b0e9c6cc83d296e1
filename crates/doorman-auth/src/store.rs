//! In-memory account and session store.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{AuthError, Result};
use crate::password::{hash_password, verify_password};
use crate::session::{unix_now, Session};
use crate::user::{User, UserId};

/// Thread-safe in-memory store for users and their sessions.
///
/// This is the session subsystem the status panel delegates to: the panel
/// itself holds no state and asks this store on every render.
#[derive(Debug, Default)]
pub struct AuthStore {
    /// Next available ID for new users.
    next_id: AtomicU64,

    /// Users by ID.
    users: RwLock<HashMap<UserId, User>>,

    /// Username to ID mapping.
    username_index: RwLock<HashMap<String, UserId>>,

    /// Argon2 password hashes by user ID. Kept out of `User` so account
    /// data can be serialized without ever carrying hashes along.
    password_hashes: RwLock<HashMap<UserId, String>>,

    /// Active sessions by token.
    sessions: RwLock<HashMap<String, Session>>,
}

impl AuthStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique user ID.
    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    // ==================== Users ====================

    /// Create a new user account.
    pub fn create_user(
        &self,
        username: String,
        display_name: Option<String>,
        password: &str,
    ) -> Result<User> {
        User::validate_username(&username)?;

        if password.is_empty() {
            return Err(AuthError::InvalidInput("password cannot be empty".into()));
        }

        if self.username_index.read().contains_key(&username) {
            return Err(AuthError::AlreadyExists(format!("user '{}'", username)));
        }

        let hash = hash_password(password)?;

        let id = self.next_id();
        let user = User::new(id, username.clone(), display_name);

        self.users.write().insert(id, user.clone());
        self.username_index.write().insert(username, id);
        self.password_hashes.write().insert(id, hash);

        tracing::debug!(user_id = id, username = %user.username, "user created");
        Ok(user)
    }

    /// Get a user by ID.
    pub fn user(&self, id: UserId) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    /// Get a user by username.
    pub fn user_by_name(&self, username: &str) -> Option<User> {
        let id = self.username_index.read().get(username).copied()?;
        self.user(id)
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    // ==================== Sessions ====================

    /// Verify credentials and mint a new session.
    ///
    /// Unknown usernames and wrong passwords both come back as
    /// `InvalidCredentials` so callers cannot enumerate accounts.
    pub fn sign_in(&self, username: &str, password: &str, ttl_secs: u64) -> Result<Session> {
        let user = self
            .user_by_name(username)
            .ok_or(AuthError::InvalidCredentials)?;

        let hashes = self.password_hashes.read();
        let hash = hashes.get(&user.id).ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, hash)?;
        drop(hashes);

        let session = Session::generate(user.id, ttl_secs);
        self.sessions
            .write()
            .insert(session.token.clone(), session.clone());

        tracing::debug!(user_id = user.id, username = %user.username, "session created");
        Ok(session)
    }

    /// Resolve a session token to its user.
    ///
    /// Returns `None` for unknown or expired tokens; expired sessions are
    /// indistinguishable from absent ones.
    pub fn session_user(&self, token: &str) -> Option<User> {
        let sessions = self.sessions.read();
        let session = sessions.get(token)?;
        if session.is_expired(unix_now()) {
            return None;
        }
        self.user(session.user_id)
    }

    /// End a session. Unknown tokens are a no-op, so repeated sign-outs
    /// are harmless.
    pub fn sign_out(&self, token: &str) {
        if let Some(session) = self.sessions.write().remove(token) {
            tracing::debug!(user_id = session.user_id, "session ended");
        }
    }

    /// Drop all expired sessions, returning how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let now = unix_now();
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    /// Number of live (unswept) sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup_user() {
        let store = AuthStore::new();

        let user = store
            .create_user("alice".into(), Some("Alice".into()), "secret")
            .unwrap();
        assert_eq!(user.username, "alice");

        // Duplicate fails
        assert!(matches!(
            store.create_user("alice".into(), None, "other"),
            Err(AuthError::AlreadyExists(_))
        ));

        // Get by ID and by name
        assert_eq!(store.user(user.id).unwrap().username, "alice");
        assert_eq!(store.user_by_name("alice").unwrap().id, user.id);
        assert!(store.user_by_name("bob").is_none());
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_invalid_user_input_rejected() {
        let store = AuthStore::new();
        assert!(store.create_user("Not-Valid!".into(), None, "pw").is_err());
        assert!(store.create_user("alice".into(), None, "").is_err());
        assert_eq!(store.user_count(), 0);
    }

    #[test]
    fn test_sign_in_and_resolve() {
        let store = AuthStore::new();
        store.create_user("alice".into(), None, "secret").unwrap();

        let session = store.sign_in("alice", "secret", 3600).unwrap();
        assert_eq!(store.session_count(), 1);

        let user = store.session_user(&session.token).unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_bad_credentials_indistinct() {
        let store = AuthStore::new();
        store.create_user("alice".into(), None, "secret").unwrap();

        assert!(matches!(
            store.sign_in("alice", "wrong", 3600),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            store.sign_in("nobody", "secret", 3600),
            Err(AuthError::InvalidCredentials)
        ));
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let store = AuthStore::new();
        store.create_user("alice".into(), None, "secret").unwrap();
        let session = store.sign_in("alice", "secret", 3600).unwrap();

        store.sign_out(&session.token);
        assert!(store.session_user(&session.token).is_none());
        assert_eq!(store.session_count(), 0);

        // Second sign-out of the same token is a no-op.
        store.sign_out(&session.token);
        store.sign_out("never-existed");
    }

    #[test]
    fn test_expired_session_is_absent() {
        let store = AuthStore::new();
        store.create_user("alice".into(), None, "secret").unwrap();

        // TTL of zero expires immediately.
        let session = store.sign_in("alice", "secret", 0).unwrap();
        assert!(store.session_user(&session.token).is_none());

        assert_eq!(store.session_count(), 1);
        assert_eq!(store.sweep_expired(), 1);
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_concurrent_sessions_per_user() {
        let store = AuthStore::new();
        store.create_user("alice".into(), None, "secret").unwrap();

        let a = store.sign_in("alice", "secret", 3600).unwrap();
        let b = store.sign_in("alice", "secret", 3600).unwrap();
        assert_ne!(a.token, b.token);
        assert_eq!(store.session_count(), 2);

        // Ending one session leaves the other intact.
        store.sign_out(&a.token);
        assert!(store.session_user(&b.token).is_some());
    }
}
