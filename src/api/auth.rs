use actix_web::{get, post, web, HttpRequest, HttpResponse};
use actix_web_validator::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::auth::AuthSession;

#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: SessionView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl SessionView {
    fn new(session: AuthSession, is_admin: bool) -> Self {
        Self {
            name: session.name,
            email: session.email,
            is_admin,
        }
    }
}

#[post("/sign-in")]
async fn sign_in(state: web::Data<AppState>, body: Json<SignInRequest>) -> Result<HttpResponse, ApiError> {
    let session = state.auth.sign_in(&body.email, &body.password).await?;
    let is_admin = state.auth.is_admin(&session);
    let token = state.sessions.insert(session.clone());

    Ok(HttpResponse::Ok().json(SignInResponse {
        token,
        user: SessionView::new(session, is_admin),
    }))
}

#[post("/sign-out")]
async fn sign_out(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let (token, session) = state.current_session(&req)?;
    state.sessions.remove(&token);
    state.chats.remove(&token);
    info!("Session closed for {}", session.email);
    Ok(HttpResponse::NoContent().finish())
}

#[get("/me")]
async fn me(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let (_, session) = state.current_session(&req)?;
    let is_admin = state.auth.is_admin(&session);
    Ok(HttpResponse::Ok().json(SessionView::new(session, is_admin)))
}

pub fn auth_config(config: &mut web::ServiceConfig) {
    config.service(
        web::scope("/auth")
            .service(sign_in)
            .service(sign_out)
            .service(me),
    );
}
