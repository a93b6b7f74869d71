pub mod auth;
pub mod chat;
pub mod error;
pub mod fixtures;
pub mod health;
pub mod job;
pub mod state;
pub mod validation;
pub mod views;

use actix_web::web;

pub use error::ApiError;
pub use state::AppState;

/// Everything mounted under `/api`
pub fn api_config(config: &mut web::ServiceConfig) {
    config.service(
        web::scope("/api")
            .configure(auth::auth_config)
            .configure(job::job_config)
            .configure(fixtures::fixtures_config)
            .configure(views::views_config)
            .configure(chat::chat_config),
    );
}
