use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::fixtures;

#[derive(Debug, Deserialize)]
pub struct DiscoverQuery {
    #[serde(default)]
    pub q: String,
}

/// Read-only fixture tables by name
#[get("/{name}")]
async fn fixture_table(name: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let response = match name.as_str() {
        "trends" => HttpResponse::Ok().json(fixtures::trends()),
        "problems" => HttpResponse::Ok().json(fixtures::trending_problems()),
        "opportunities" => HttpResponse::Ok().json(fixtures::ai_opportunities()),
        "research" => HttpResponse::Ok().json(fixtures::research_jobs()),
        "parameters" => HttpResponse::Ok().json(fixtures::research_parameters()),
        other => return Err(ApiError::NotFound(format!("Fixture '{}'", other))),
    };
    Ok(response)
}

/// Simulated problem search. Waits the configured search delay first.
#[get("/discover")]
async fn discover(state: web::Data<AppState>, query: web::Query<DiscoverQuery>) -> HttpResponse {
    debug!("Discovering problems for query={:?}", query.q);
    let results = fixtures::discover_problems(&query.q, state.config.search_delay).await;
    HttpResponse::Ok().json(results)
}

pub fn fixtures_config(config: &mut web::ServiceConfig) {
    config
        .service(web::scope("/fixtures").service(fixture_table))
        .service(web::scope("/problems").service(discover));
}
