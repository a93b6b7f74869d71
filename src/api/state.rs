use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use actix_web::HttpRequest;

use crate::auth::{AuthError, AuthService, AuthSession, SessionStore};
use crate::chat::ResearchChat;
use crate::config::Config;
use crate::simulator::{SimulationRegistry, SimulationSettings};
use crate::store::{JobBoard, NotificationFeed};

/// One research chat per session token
#[derive(Clone)]
pub struct ChatStore {
    reply_delay: Duration,
    chats: Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<ResearchChat>>>>>,
}

impl ChatStore {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            reply_delay,
            chats: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn for_session(&self, token: &str) -> Arc<tokio::sync::Mutex<ResearchChat>> {
        self.chats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(token.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(ResearchChat::new(self.reply_delay))))
            .clone()
    }

    pub fn remove(&self, token: &str) {
        self.chats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }
}

/// Everything the handlers share. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub board: JobBoard,
    pub simulations: SimulationRegistry,
    pub notifications: NotificationFeed,
    pub auth: AuthService,
    pub sessions: SessionStore,
    pub chats: ChatStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let settings = SimulationSettings::from_config(&config);
        Self::with_simulation(config, settings)
    }

    /// Same as `new` but with explicit simulation settings (fixed increments in tests)
    pub fn with_simulation(config: Config, settings: SimulationSettings) -> Self {
        let board = JobBoard::from_fixtures();
        let notifications = NotificationFeed::new(config.notification_feed_capacity);
        let simulations =
            SimulationRegistry::new(board.clone(), Arc::new(notifications.clone()), settings);

        Self {
            auth: AuthService::from_config(&config),
            chats: ChatStore::new(config.chat_reply_delay),
            sessions: SessionStore::new(),
            board,
            simulations,
            notifications,
            config,
        }
    }

    /// Bearer token and its session
    pub fn current_session(&self, req: &HttpRequest) -> Result<(String, AuthSession), AuthError> {
        let token = bearer_token(req).ok_or(AuthError::Unauthorized)?;
        let session = self.sessions.get(&token).ok_or(AuthError::Unauthorized)?;
        Ok((token, session))
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get(actix_web::http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
}
