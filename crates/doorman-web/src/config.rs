//! Web configuration.

use doorman_auth::DEFAULT_SESSION_TTL_SECS;
use serde::{Deserialize, Serialize};

/// Configuration for the web front.
///
/// `sign_in_path` is the application-configured sign-in destination the
/// status panel links to when nobody is signed in.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    /// Path of the sign-in page.
    pub sign_in_path: String,
    /// Where to send the browser after signing out.
    pub post_sign_out_redirect: String,
    /// Session lifetime in seconds.
    pub session_ttl_secs: u64,
    /// Set the Secure flag on session cookies. Leave off only for
    /// development without TLS.
    pub cookie_secure: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            sign_in_path: "/signin".to_string(),
            post_sign_out_redirect: "/".to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            cookie_secure: false,
        }
    }
}
