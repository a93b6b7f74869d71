use actix_web::{get, post, web, HttpRequest, HttpResponse};
use actix_web_validator::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::chat::{ChatMessage, QUICK_ACTIONS};

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The user's message followed by the assistant reply
    pub new_messages: Vec<ChatMessage>,
    pub quick_actions: [&'static str; 4],
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
    pub quick_actions: [&'static str; 4],
}

#[post("")]
async fn send_message(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let (token, _) = state.current_session(&req)?;
    let chat = state.chats.for_session(&token);
    let new_messages = chat.lock().await.send(&body.message).await?;

    Ok(HttpResponse::Ok().json(ChatResponse {
        new_messages,
        quick_actions: QUICK_ACTIONS,
    }))
}

#[get("")]
async fn transcript(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let (token, _) = state.current_session(&req)?;
    let chat = state.chats.for_session(&token);
    let messages = chat.lock().await.messages().to_vec();

    Ok(HttpResponse::Ok().json(TranscriptResponse {
        messages,
        quick_actions: QUICK_ACTIONS,
    }))
}

pub fn chat_config(config: &mut web::ServiceConfig) {
    config.service(web::scope("/chat").service(send_message).service(transcript));
}
