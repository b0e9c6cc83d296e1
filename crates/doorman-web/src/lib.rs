//! Doorman Web Front
//!
//! Server-rendered pages built around the user status panel:
//! - A panel fragment showing the signed-in user and a sign-out action,
//!   or a sign-in link when nobody is signed in
//! - Sign-in and sign-out routes that drive the session store
//! - Per-request session resolution from an HttpOnly cookie

pub mod config;
pub mod error;
pub mod panel;
pub mod routes;
pub mod session;
pub mod templates;

pub use config::WebConfig;
pub use error::WebError;
pub use panel::UserStatusPanel;
pub use routes::{web_routes, WebState, SIGN_IN_SUBMIT_PATH, SIGN_OUT_PATH};
pub use session::{SessionView, SESSION_COOKIE};
pub use templates::*;
