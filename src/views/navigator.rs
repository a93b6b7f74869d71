use tracing::debug;

use crate::auth::{AuthService, AuthSession};

use super::View;

/// Holds the single active view and applies the access redirects.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Switch views; returns the view actually shown.
    ///
    /// Without a session everything but Landing falls back to Landing, and
    /// Admin falls back to Landing unless the admin gate passes.
    pub fn navigate(&mut self, target: View, session: Option<&AuthSession>, auth: &AuthService) -> View {
        let allowed = match (target.requires_session(), session) {
            (false, _) => true,
            (true, None) => false,
            (true, Some(s)) => !target.requires_admin() || auth.is_admin(s),
        };

        self.active = if allowed {
            target
        } else {
            debug!("Redirecting {:?} to landing", target);
            View::Landing
        };
        self.active
    }

    /// Sign-out tears the session down and returns to Landing
    pub fn sign_out(&mut self) {
        self.active = View::Landing;
    }
}
