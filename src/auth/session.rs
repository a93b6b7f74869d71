use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, info};

use super::AuthSession;

const TOKEN_LEN: usize = 32;

/// Signed-in sessions keyed by opaque bearer token.
///
/// Created once at startup and handed to the HTTP layer through `AppState`.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, AuthSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session and return its token
    pub fn insert(&self, session: AuthSession) -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        debug!("Session opened for {}", session.email);
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), session);
        token
    }

    pub fn get(&self, token: &str) -> Option<AuthSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// Sign out; returns the session that was removed
    pub fn remove(&self, token: &str) -> Option<AuthSession> {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
        if let Some(session) = &removed {
            info!("Signed out {}", session.email);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_out_clears_the_session() {
        let store = SessionStore::new();
        let token = store.insert(AuthSession {
            name: "John Doe".to_string(),
            email: "founder@example.com".to_string(),
        });

        assert_eq!(token.len(), TOKEN_LEN);
        assert!(store.get(&token).is_some());
        assert!(store.remove(&token).is_some());
        assert!(store.get(&token).is_none());
        assert!(store.is_empty());
    }
}
