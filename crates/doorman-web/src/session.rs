//! Session cookies and the per-request session view.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use doorman_auth::User;
use std::convert::Infallible;
use time::Duration;

use crate::config::WebConfig;
use crate::routes::WebState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "doorman_session";

/// What the current request knows about its session: a signed-in user, or
/// nothing. Resolved fresh on every request; never cached across renders.
#[derive(Debug, Clone)]
pub struct SessionView {
    user: Option<User>,
}

impl SessionView {
    /// A view with no signed-in user.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// A view for a signed-in user.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

impl<S> FromRequestParts<S> for SessionView
where
    WebState: FromRef<S>,
    S: Send + Sync,
{
    // Anonymous is a valid view, so extraction never rejects.
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = jar.get(SESSION_COOKIE).map(Cookie::value) else {
            return Ok(Self::anonymous());
        };

        let state = WebState::from_ref(state);
        Ok(match state.auth.session_user(token) {
            Some(user) => Self::signed_in(user),
            None => Self::anonymous(),
        })
    }
}

/// Build the HttpOnly session cookie for a freshly minted token.
pub(crate) fn session_cookie(token: String, config: &WebConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::seconds(config.session_ttl_secs as i64))
        .build()
}

/// Build a cookie that clears the session cookie.
pub(crate) fn clear_session_cookie(config: &WebConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::ZERO)
        .build()
}
