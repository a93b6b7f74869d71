use actix_web::{
    get, post,
    web::{Data, Path, ServiceConfig, scope},
    HttpRequest, HttpResponse,
};
use actix_web_validator::Json;
use chrono::Utc;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::wizard::{CreateJobWizard, ProjectCreationForm, ProjectDraft};

use super::dto::{NotificationsResponse, ResearchPlanResponse};
use super::service::JobService;

#[get("")]
async fn list_jobs(service: Data<JobService>) -> HttpResponse {
    HttpResponse::Ok().json(service.list_jobs())
}

#[get("/{id}")]
async fn get_job(service: Data<JobService>, id: Path<String>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.get_job(&id)?))
}

#[get("/{id}/results")]
async fn job_results(service: Data<JobService>, id: Path<String>) -> Result<HttpResponse, ApiError> {
    let results = service
        .job_results(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("Results for job {}", id)))?;
    Ok(HttpResponse::Ok().json(results))
}

#[get("/stats")]
async fn dashboard_stats(service: Data<JobService>) -> HttpResponse {
    HttpResponse::Ok().json(service.stats())
}

#[post("/{id}/start")]
async fn start_job(
    state: Data<AppState>,
    service: Data<JobService>,
    req: HttpRequest,
    id: Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.current_session(&req)?;
    Ok(HttpResponse::Accepted().json(service.start_job(&id)?))
}

#[post("/{id}/cancel")]
async fn cancel_job(
    state: Data<AppState>,
    service: Data<JobService>,
    req: HttpRequest,
    id: Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.current_session(&req)?;
    Ok(HttpResponse::Ok().json(service.cancel_job(&id)?))
}

#[post("")]
async fn create_project(
    state: Data<AppState>,
    service: Data<JobService>,
    req: HttpRequest,
    draft: Json<ProjectDraft>,
) -> Result<HttpResponse, ApiError> {
    state.current_session(&req)?;

    // Walk the dialog so whitespace-only fields fail the same way they do in the UI
    let mut wizard = CreateJobWizard::new();
    *wizard.draft_mut() = draft.into_inner();
    wizard.next()?;
    wizard.next()?;
    let draft = wizard.submit()?;

    Ok(HttpResponse::Created().json(service.create_project(&draft)))
}

#[post("/research-plan")]
async fn submit_research_plan(
    state: Data<AppState>,
    req: HttpRequest,
    form: Json<ProjectCreationForm>,
) -> Result<HttpResponse, ApiError> {
    state.current_session(&req)?;
    let form = form.into_inner();
    form.submit()?;

    Ok(HttpResponse::Ok().json(ResearchPlanResponse {
        depth_label: form.depth_label(),
        next_run: form.next_run(Utc::now().date_naive()),
        form,
    }))
}

/// Drains the toast feed, oldest first
#[get("")]
async fn drain_notifications(state: Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(NotificationsResponse {
        notifications: state.notifications.drain(),
    })
}

pub fn job_config(config: &mut ServiceConfig) {
    config
        .service(
            scope("/jobs")
                .service(list_jobs)
                .service(get_job)
                .service(job_results)
                .service(start_job)
                .service(cancel_job),
        )
        .service(
            scope("/projects")
                .service(create_project)
                .service(submit_research_plan),
        )
        .service(scope("/notifications").service(drain_notifications))
        .service(scope("/dashboard").service(dashboard_stats));
}
