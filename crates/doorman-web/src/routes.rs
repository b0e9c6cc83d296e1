//! Web route handlers for the Doorman front.

use askama::Template;
use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use doorman_auth::AuthError;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::WebConfig;
use crate::error::WebError;
use crate::panel::UserStatusPanel;
use crate::session::{clear_session_cookie, session_cookie, SessionView, SESSION_COOKIE};
use crate::templates::*;

/// Form target for sign-in submissions.
pub const SIGN_IN_SUBMIT_PATH: &str = "/signin";

/// Form target for the panel's sign-out action.
pub const SIGN_OUT_PATH: &str = "/signout";

/// Shared state for web routes.
#[derive(Clone)]
pub struct WebState {
    pub auth: Arc<doorman_auth::AuthStore>,
    pub config: WebConfig,
}

/// Create the web router.
///
/// The sign-in page is registered at the configured destination so the
/// panel's link and the route always agree.
pub fn web_routes<S>(config: &WebConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    WebState: FromRef<S>,
{
    Router::new()
        .route("/", get(index))
        .route(&config.sign_in_path, get(sign_in_form))
        .route(SIGN_IN_SUBMIT_PATH, post(sign_in_submit))
        .route(SIGN_OUT_PATH, post(sign_out))
}

/// Landing page handler.
async fn index(
    State(state): State<WebState>,
    session: SessionView,
) -> Result<impl IntoResponse, WebError> {
    let template = IndexTemplate {
        panel: UserStatusPanel::from_session(&session, &state.config),
    };
    Ok(Html(template.render()?))
}

/// Sign-in form page. Already signed-in visitors are sent home.
async fn sign_in_form(
    State(state): State<WebState>,
    session: SessionView,
) -> Result<Response, WebError> {
    if session.is_signed_in() {
        return Ok(Redirect::to("/").into_response());
    }

    let template = SignInTemplate {
        panel: UserStatusPanel::from_session(&session, &state.config),
        error: None,
        submit_path: SIGN_IN_SUBMIT_PATH.to_owned(),
    };
    Ok(Html(template.render()?).into_response())
}

/// Sign-in form fields.
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

/// Sign-in submission: verify credentials, set the session cookie, go home.
async fn sign_in_submit(
    State(state): State<WebState>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Result<Response, WebError> {
    match state
        .auth
        .sign_in(&form.username, &form.password, state.config.session_ttl_secs)
    {
        Ok(session) => {
            tracing::info!(username = %form.username, "sign-in succeeded");
            let jar = jar.add(session_cookie(session.token, &state.config));
            Ok((jar, Redirect::to("/")).into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::info!(username = %form.username, "sign-in rejected");
            let template = SignInTemplate {
                panel: UserStatusPanel::signed_out(&state.config),
                error: Some("Unknown username or wrong password.".to_owned()),
                submit_path: SIGN_IN_SUBMIT_PATH.to_owned(),
            };
            Ok((StatusCode::UNAUTHORIZED, Html(template.render()?)).into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// Sign-out action: end the session, clear the cookie, and redirect to the
/// configured destination.
async fn sign_out(State(state): State<WebState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.auth.sign_out(cookie.value());
        tracing::info!("sign-out completed");
    }

    let jar = jar.add(clear_session_cookie(&state.config));
    (jar, Redirect::to(&state.config.post_sign_out_redirect)).into_response()
}
