//! The user status panel.
//!
//! A stateless view built per render from the request's session. It has
//! exactly two mutually exclusive states: signed in (username plus a
//! sign-out action) or signed out (a single sign-in link). The session
//! subsystem owns all the state; the panel just asks.

use crate::config::WebConfig;
use crate::routes::SIGN_OUT_PATH;
use crate::session::SessionView;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PanelState {
    SignedIn { username: String },
    SignedOut,
}

/// View model for the status panel fragment.
#[derive(Debug, Clone)]
pub struct UserStatusPanel {
    state: PanelState,
    sign_in_path: String,
    sign_out_path: String,
}

impl UserStatusPanel {
    /// Build the panel for the current request.
    pub fn from_session(view: &SessionView, config: &WebConfig) -> Self {
        let state = match view.current_user() {
            Some(user) => PanelState::SignedIn {
                username: user.display().to_owned(),
            },
            None => PanelState::SignedOut,
        };
        Self {
            state,
            sign_in_path: config.sign_in_path.clone(),
            sign_out_path: SIGN_OUT_PATH.to_owned(),
        }
    }

    /// Build a signed-out panel directly (for pages rendered outside a
    /// session context, like a failed sign-in form).
    pub fn signed_out(config: &WebConfig) -> Self {
        Self {
            state: PanelState::SignedOut,
            sign_in_path: config.sign_in_path.clone(),
            sign_out_path: SIGN_OUT_PATH.to_owned(),
        }
    }

    /// Whether the panel renders its signed-in state.
    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, PanelState::SignedIn { .. })
    }

    /// The display string of the signed-in user.
    ///
    /// # Panics
    ///
    /// Panics when the panel is in its signed-out state. Callers must guard
    /// with [`is_signed_in`](Self::is_signed_in), as the templates do; a
    /// violation is a programmer error, not a recoverable condition.
    pub fn username(&self) -> &str {
        match &self.state {
            PanelState::SignedIn { username } => username,
            PanelState::SignedOut => {
                panic!("UserStatusPanel::username called while signed out")
            }
        }
    }

    /// Link target for the sign-in state.
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Form action for the sign-out state.
    pub fn sign_out_path(&self) -> &str {
        &self.sign_out_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::UserStatusPanelTemplate;
    use askama::Template;
    use doorman_auth::User;

    fn signed_in_panel(username: &str, display_name: Option<&str>) -> UserStatusPanel {
        let user = User::new(1, username.into(), display_name.map(str::to_owned));
        let view = SessionView::signed_in(user);
        UserStatusPanel::from_session(&view, &WebConfig::default())
    }

    fn render(panel: UserStatusPanel) -> String {
        UserStatusPanelTemplate { panel }.render().unwrap()
    }

    #[test]
    fn test_signed_in_shows_username_and_sign_out() {
        let html = render(signed_in_panel("alice", None));
        assert!(html.contains("alice"));
        assert!(html.contains(r#"action="/signout""#));
        assert!(!html.contains(r#"href="/signin""#));
    }

    #[test]
    fn test_signed_in_prefers_display_name() {
        let html = render(signed_in_panel("alice", Some("Alice L.")));
        assert!(html.contains("Alice L."));
    }

    #[test]
    fn test_signed_out_shows_only_sign_in_link() {
        let panel = UserStatusPanel::signed_out(&WebConfig::default());
        let html = render(panel);
        assert!(html.contains(r#"href="/signin""#));
        assert!(!html.contains("signout"));
        assert!(!html.contains("username"));
    }

    #[test]
    fn test_sign_in_link_honors_configured_destination() {
        let config = WebConfig {
            sign_in_path: "/account/login".into(),
            ..WebConfig::default()
        };
        let html = render(UserStatusPanel::signed_out(&config));
        assert!(html.contains(r#"href="/account/login""#));
    }

    #[test]
    fn test_states_are_complementary() {
        let signed_in = render(signed_in_panel("alice", None));
        let signed_out = render(UserStatusPanel::signed_out(&WebConfig::default()));

        assert!(signed_in.contains("sign-out") && !signed_in.contains("sign-in"));
        assert!(signed_out.contains("sign-in") && !signed_out.contains("sign-out"));
    }

    #[test]
    fn test_display_name_is_escaped() {
        let html = render(signed_in_panel("mallory", Some("<script>alert(1)</script>")));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    #[should_panic(expected = "signed out")]
    fn test_username_panics_when_signed_out() {
        let panel = UserStatusPanel::signed_out(&WebConfig::default());
        let _ = panel.username();
    }
}
