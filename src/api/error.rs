use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::{debug, warn};

use crate::api::validation::ErrorResponse;
use crate::auth::AuthError;
use crate::chat::ChatError;
use crate::simulator::SimulatorError;
use crate::wizard::WizardError;

/// Handler-level errors
#[derive(Debug)]
pub enum ApiError {
    Simulator(SimulatorError),
    Auth(AuthError),
    Wizard(WizardError),
    Chat(ChatError),

    /// Unknown resource in a path segment
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Simulator(e) => write!(f, "Simulation error: {}", e),
            ApiError::Auth(e) => write!(f, "Auth error: {}", e),
            ApiError::Wizard(e) => write!(f, "Project error: {}", e),
            ApiError::Chat(e) => write!(f, "Chat error: {}", e),
            ApiError::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SimulatorError> for ApiError {
    fn from(e: SimulatorError) -> Self {
        ApiError::Simulator(e)
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Auth(e)
    }
}

impl From<WizardError> for ApiError {
    fn from(e: WizardError) -> Self {
        ApiError::Wizard(e)
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        ApiError::Chat(e)
    }
}

impl ApiError {
    fn title(&self) -> &'static str {
        match self {
            ApiError::Simulator(SimulatorError::UnknownJob(_)) | ApiError::NotFound(_) => "Not found",
            ApiError::Simulator(_) => "Conflict",
            ApiError::Auth(AuthError::MissingCredentials) => "Validation failed",
            ApiError::Auth(AuthError::Unauthorized) => "Unauthorized",
            ApiError::Auth(AuthError::Forbidden) => "Forbidden",
            ApiError::Wizard(_) | ApiError::Chat(_) => "Validation failed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Simulator(SimulatorError::UnknownJob(_)) | ApiError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Simulator(_) => StatusCode::CONFLICT,
            ApiError::Auth(AuthError::MissingCredentials) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(AuthError::Forbidden) => StatusCode::FORBIDDEN,
            ApiError::Wizard(_) | ApiError::Chat(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::UNAUTHORIZED {
            debug!("{}", self);
        } else {
            warn!("{}", self);
        }

        let message = match self {
            ApiError::Simulator(e) => e.to_string(),
            ApiError::Auth(e) => e.to_string(),
            ApiError::Wizard(WizardError::Incomplete { messages, .. })
            | ApiError::Wizard(WizardError::Invalid(messages)) => messages.join(", "),
            ApiError::Wizard(e) => e.to_string(),
            ApiError::Chat(e) => e.to_string(),
            ApiError::NotFound(what) => format!("{} not found", what),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.title().to_string(),
            fields: serde_json::json!({ "message": message }),
        })
    }
}
