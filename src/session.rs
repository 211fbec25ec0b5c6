use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub const EMPTY_CREDENTIALS: &str = "Enter both email and password";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Screen the session is currently on. One value per session, reset to
/// `Login` on logout; never persisted across restarts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    AdminPanel,
}

/// Result of a credential check, shared by every `Authenticator`
/// implementation so the page transitions below stay identical no matter how
/// credentials are verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Admin,
    Employee,
    Denied(&'static str),
}

impl Page {
    /// Transition taken when credentials are submitted. Only the login page
    /// reacts; a stray submission from any other page leaves it unchanged.
    pub fn on_login(self, outcome: LoginOutcome) -> Page {
        match (self, outcome) {
            (Page::Login, LoginOutcome::Admin) => Page::AdminPanel,
            (Page::Login, LoginOutcome::Employee) => Page::Dashboard,
            (Page::Login, LoginOutcome::Denied(_)) => Page::Login,
            (other, _) => other,
        }
    }

    /// Logout always lands back on the login page, from anywhere.
    pub fn on_logout(self) -> Page {
        Page::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::authenticator::{Authenticator, DomainSuffixAuthenticator};
    use futures::executor::block_on;

    fn outcome(email: &str, password: &str) -> LoginOutcome {
        let auth = DomainSuffixAuthenticator::new("@admin.com".to_string());
        block_on(auth.authenticate(email, password)).unwrap()
    }

    #[test]
    fn admin_suffix_reaches_admin_panel() {
        let next = Page::Login.on_login(outcome("boss@admin.com", "secret"));
        assert_eq!(next, Page::AdminPanel);
    }

    #[test]
    fn plain_email_reaches_dashboard() {
        let next = Page::Login.on_login(outcome("worker@corp.com", "secret"));
        assert_eq!(next, Page::Dashboard);
    }

    #[test]
    fn empty_fields_stay_on_login_with_error() {
        for (email, password) in [("", "pw"), ("a@b.com", ""), ("", "")] {
            let out = outcome(email, password);
            assert_eq!(out, LoginOutcome::Denied(EMPTY_CREDENTIALS));
            assert_eq!(Page::Login.on_login(out), Page::Login);
        }
    }

    #[test]
    fn logout_always_returns_to_login() {
        assert_eq!(Page::Dashboard.on_logout(), Page::Login);
        assert_eq!(Page::AdminPanel.on_logout(), Page::Login);
        assert_eq!(Page::Login.on_logout(), Page::Login);
    }

    #[test]
    fn login_submission_ignored_outside_login_page() {
        assert_eq!(
            Page::Dashboard.on_login(LoginOutcome::Admin),
            Page::Dashboard
        );
        assert_eq!(
            Page::AdminPanel.on_login(LoginOutcome::Employee),
            Page::AdminPanel
        );
    }

    #[test]
    fn initial_page_is_login() {
        assert_eq!(Page::default(), Page::Login);
    }
}
