//! Single-slot user session

use civica_domain::User;

/// Display name attached to reports made before login.
pub const ANONYMOUS_REPORTER: &str = "Anonymous";

/// The process-wide session slot. One user at a time; a second login
/// replaces the session rather than stacking.
///
/// A sum type rather than `Option<User>` plus a boolean, so "logged in
/// with no user" is unrepresentable.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(user) => Some(user),
        }
    }

    /// The name new reports are attributed to: the session user's name,
    /// or the anonymous sentinel before login.
    pub fn reporter_name(&self) -> &str {
        match self {
            Session::LoggedOut => ANONYMOUS_REPORTER,
            Session::LoggedIn(user) => &user.name,
        }
    }
}
