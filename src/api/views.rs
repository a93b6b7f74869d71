use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::views::{AdminOverview, DashboardViewModel, Navigator, Section, View};

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub section: Section,
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub requested: View,
    pub shown: View,
}

#[get("/dashboard")]
async fn dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, ApiError> {
    state.current_session(&req)?;
    let jobs = state.board.list();
    let simulations = &state.simulations;
    let view_model = DashboardViewModel::build(query.section, &jobs, query.q.as_deref(), |id| {
        simulations.is_running(id)
    });
    Ok(HttpResponse::Ok().json(view_model))
}

/// Resolve a navigation request against the caller's session.
/// Anonymous callers are allowed here; they are redirected to Landing.
#[post("/navigate")]
async fn navigate(
    state: web::Data<AppState>,
    req: HttpRequest,
    target: web::Json<View>,
) -> HttpResponse {
    let session = state.current_session(&req).ok().map(|(_, s)| s);
    let mut navigator = Navigator::new();
    let shown = navigator.navigate(*target, session.as_ref(), &state.auth);
    HttpResponse::Ok().json(NavigateResponse {
        requested: *target,
        shown,
    })
}

#[get("/overview")]
async fn admin_overview(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let (_, session) = state.current_session(&req)?;
    state.auth.require_admin(Some(&session))?;
    Ok(HttpResponse::Ok().json(AdminOverview::load()))
}

pub fn views_config(config: &mut web::ServiceConfig) {
    config
        .service(web::scope("/views").service(dashboard).service(navigate))
        .service(web::scope("/admin").service(admin_overview));
}
