use chrono::Utc;
use tracing::info;

use crate::fixtures::{self, Level, SimulatedJob};
use crate::simulator::{SimulationRegistry, SimulatorError};
use crate::store::{BoardStats, JobBoard, NewJob};
use crate::wizard::ProjectDraft;

use super::dto::{JobListResponse, JobResponse, JobResultsResponse, JobView};

/// Success probability shown for projects that have not been researched yet
const UNSCORED_PROBABILITY: u8 = 50;

/// Job operations behind the HTTP handlers
#[derive(Clone)]
pub struct JobService {
    board: JobBoard,
    simulations: SimulationRegistry,
}

impl JobService {
    pub fn new(simulations: SimulationRegistry) -> Self {
        Self {
            board: simulations.board().clone(),
            simulations,
        }
    }

    fn view(&self, job: SimulatedJob) -> JobView {
        let run_state = self.simulations.state(&job.id);
        JobView { job, run_state }
    }

    pub fn list_jobs(&self) -> JobListResponse {
        let jobs = self.board.list().into_iter().map(|j| self.view(j)).collect();
        JobListResponse {
            jobs,
            active_simulations: self.simulations.active_count(),
        }
    }

    pub fn get_job(&self, job_id: &str) -> Result<JobView, SimulatorError> {
        self.board
            .get(job_id)
            .map(|j| self.view(j))
            .ok_or_else(|| SimulatorError::UnknownJob(job_id.to_string()))
    }

    /// Report for a job; `Ok(None)` while the job is not COMPLETED
    pub fn job_results(&self, job_id: &str) -> Result<Option<JobResultsResponse>, SimulatorError> {
        let job = self.get_job(job_id)?;
        Ok(fixtures::research_results(&job.job).map(|results| JobResultsResponse { job, results }))
    }

    pub fn stats(&self) -> BoardStats {
        self.board.stats()
    }

    /// Start simulated AI research for a PENDING job
    ///
    /// # Returns
    /// - `Ok(JobResponse)` - job is now ANALYZING with a live timer
    /// - `Err(SimulatorError)` - unknown job, not pending, or already running
    pub fn start_job(&self, job_id: &str) -> Result<JobResponse, SimulatorError> {
        info!("Service: Starting research for job id={}", job_id);
        let job = self.simulations.start(job_id)?;
        Ok(JobResponse {
            message: format!("Research started for {}", job.title),
            job: self.view(job),
        })
    }

    pub fn cancel_job(&self, job_id: &str) -> Result<JobResponse, SimulatorError> {
        info!("Service: Cancelling research for job id={}", job_id);
        self.simulations.cancel(job_id)?;
        let job = self.get_job(job_id)?;
        Ok(JobResponse {
            message: format!("Research cancelled for {}", job.job.title),
            job,
        })
    }

    /// Put a validated wizard submission on the board as a PENDING job
    pub fn create_project(&self, draft: &ProjectDraft) -> JobResponse {
        let job = self.board.add(NewJob {
            title: draft.title.trim().to_uppercase(),
            description: draft.description.trim().to_uppercase(),
            market_size: "TBD".to_string(),
            competition: Level::Medium,
            success_probability: UNSCORED_PROBABILITY,
            created_at: Utc::now().date_naive(),
        });
        info!("Service: Project created with id={}", job.id);
        JobResponse {
            message: "Project created successfully".to_string(),
            job: self.view(job),
        }
    }
}
