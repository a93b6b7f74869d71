use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fixtures::{ResearchResults, SimulatedJob};
use crate::simulator::{NotificationEvent, RunState};
use crate::wizard::ProjectCreationForm;

/// A job together with the state of its latest simulation run
#[derive(Debug, Serialize, Deserialize)]
pub struct JobView {
    #[serde(flatten)]
    pub job: SimulatedJob,
    pub run_state: Option<RunState>,
}

/// Response for single-job operations
#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponse {
    pub message: String,
    pub job: JobView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobView>,
    pub active_simulations: usize,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationEvent>,
}

/// Accepted full-page project form
#[derive(Debug, Serialize)]
pub struct ResearchPlanResponse {
    pub depth_label: &'static str,
    /// First scheduled run; absent for one-off research
    pub next_run: Option<NaiveDate>,
    pub form: ProjectCreationForm,
}

/// Research report of a COMPLETED job
#[derive(Debug, Serialize)]
pub struct JobResultsResponse {
    pub job: JobView,
    pub results: ResearchResults,
}
