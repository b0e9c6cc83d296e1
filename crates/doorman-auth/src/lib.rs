//! Accounts and sessions for Doorman.
//!
//! This crate provides:
//! - **Users**: account records with validated usernames
//! - **Passwords**: Argon2id hashing and verification
//! - **Sessions**: random-token sessions with expiry
//! - **AuthStore**: a thread-safe in-memory store tying them together
//!
//! # Example
//!
//! ```
//! use doorman_auth::AuthStore;
//!
//! let store = AuthStore::new();
//! store.create_user("alice".into(), Some("Alice".into()), "secret").unwrap();
//!
//! let session = store.sign_in("alice", "secret", 3600).unwrap();
//! assert_eq!(store.session_user(&session.token).unwrap().username, "alice");
//!
//! store.sign_out(&session.token);
//! assert!(store.session_user(&session.token).is_none());
//! ```

mod error;
mod password;
mod session;
mod store;
mod user;

pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use session::{generate_session_token, Session, DEFAULT_SESSION_TTL_SECS};
pub use store::AuthStore;
pub use user::{User, UserId};
