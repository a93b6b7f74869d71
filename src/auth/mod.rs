//! Stand-in authentication.
//!
//! Sign-in always succeeds after a fixed delay and the admin gate is a plain
//! email comparison. Neither is an access-control mechanism; a real
//! deployment replaces both with an identity provider and server-side roles.
pub mod session;

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::config::Config;

pub use session::SessionStore;

/// Name every fake account signs in as
pub const DEFAULT_DISPLAY_NAME: &str = "John Doe";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthSession {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password was blank
    MissingCredentials,

    /// No session for the presented token
    Unauthorized,

    /// Session exists but failed the admin gate
    Forbidden,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "Email and password are required"),
            AuthError::Unauthorized => write!(f, "Not signed in"),
            AuthError::Forbidden => write!(f, "Admin access required"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Fake sign-in plus the placeholder admin check
#[derive(Debug, Clone)]
pub struct AuthService {
    sign_in_delay: Duration,
    admin_email: String,
}

impl AuthService {
    pub fn new(sign_in_delay: Duration, admin_email: impl Into<String>) -> Self {
        Self {
            sign_in_delay,
            admin_email: admin_email.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sign_in_delay, config.admin_email.clone())
    }

    /// Resolves after the configured delay with a session for `email`.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        tokio::time::sleep(self.sign_in_delay).await;

        info!("Simulated sign-in for {}", email);
        Ok(AuthSession {
            name: DEFAULT_DISPLAY_NAME.to_string(),
            email: email.to_string(),
        })
    }

    pub fn is_admin(&self, session: &AuthSession) -> bool {
        session.email == self.admin_email
    }

    /// `Ok` only for a present session that passes the admin gate
    pub fn require_admin(&self, session: Option<&AuthSession>) -> Result<(), AuthError> {
        match session {
            None => Err(AuthError::Unauthorized),
            Some(s) if self.is_admin(s) => Ok(()),
            Some(_) => Err(AuthError::Forbidden),
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
