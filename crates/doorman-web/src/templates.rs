//! Askama template definitions.

use askama::Template;

use crate::panel::UserStatusPanel;

/// Landing page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub panel: UserStatusPanel,
}

/// Sign-in form page.
#[derive(Template)]
#[template(path = "signin.html")]
pub struct SignInTemplate {
    pub panel: UserStatusPanel,
    pub error: Option<String>,
    pub submit_path: String,
}

/// Standalone render of the user status fragment. Pages embed the same
/// fragment via `{% include %}`; this struct exists so the fragment can be
/// rendered (and tested) on its own.
#[derive(Template)]
#[template(path = "panel/user_status.html")]
pub struct UserStatusPanelTemplate {
    pub panel: UserStatusPanel,
}
