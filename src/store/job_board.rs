use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::fixtures::{self, JobId, JobStatus, Level, SimulatedJob};
use crate::simulator::SimulatorError;

/// Fields needed to put a freshly created project on the board
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub market_size: String,
    pub competition: Level,
    pub success_probability: u8,
    pub created_at: NaiveDate,
}

/// Board-wide counters for the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub completed_jobs: usize,

    /// Rounded mean over jobs with a non-zero success probability
    pub avg_success_rate: u8,
}

/// In-memory list of jobs, shared between handlers and running simulations.
///
/// Keeps insertion order, which is the order the dashboard shows.
#[derive(Clone, Default)]
pub struct JobBoard {
    jobs: Arc<RwLock<Vec<SimulatedJob>>>,
}

impl JobBoard {
    pub fn new(jobs: Vec<SimulatedJob>) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(jobs)),
        }
    }

    /// Board seeded with the dashboard fixtures
    pub fn from_fixtures() -> Self {
        Self::new(fixtures::jobs())
    }

    pub fn list(&self) -> Vec<SimulatedJob> {
        self.jobs.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn get(&self, job_id: &str) -> Option<SimulatedJob> {
        self.jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|j| j.id == job_id)
            .cloned()
    }

    pub fn stats(&self) -> BoardStats {
        let jobs = self.jobs.read().unwrap_or_else(PoisonError::into_inner);
        let count = |status: JobStatus| jobs.iter().filter(|j| j.status == status).count();

        let scored: Vec<u32> = jobs
            .iter()
            .map(|j| u32::from(j.success_probability))
            .filter(|&p| p > 0)
            .collect();
        let avg_success_rate = if scored.is_empty() {
            0
        } else {
            let mean = f64::from(scored.iter().sum::<u32>()) / scored.len() as f64;
            mean.round().clamp(0.0, 100.0) as u8
        };

        BoardStats {
            total_jobs: jobs.len(),
            active_jobs: count(JobStatus::Analyzing),
            completed_jobs: count(JobStatus::Completed),
            avg_success_rate,
        }
    }

    /// Append a PENDING job with the next numeric id
    pub fn add(&self, new_job: NewJob) -> SimulatedJob {
        let mut jobs = self.jobs.write().unwrap_or_else(PoisonError::into_inner);
        let next_id = jobs
            .iter()
            .filter_map(|j| j.id.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let job = SimulatedJob {
            id: next_id.to_string(),
            title: new_job.title,
            description: new_job.description,
            status: JobStatus::Pending,
            progress: 0,
            success_probability: new_job.success_probability,
            market_size: new_job.market_size,
            competition: new_job.competition,
            created_at: new_job.created_at,
        };
        debug!("Board: added job id={} title={}", job.id, job.title);
        jobs.push(job.clone());
        job
    }

    /// PENDING -> ANALYZING, progress reset to zero for the new run
    pub fn begin_analysis(&self, job_id: &str) -> Result<SimulatedJob, SimulatorError> {
        let mut jobs = self.jobs.write().unwrap_or_else(PoisonError::into_inner);
        let job = jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .ok_or_else(|| SimulatorError::UnknownJob(job_id.to_string()))?;

        if job.status != JobStatus::Pending {
            return Err(SimulatorError::NotPending {
                job_id: job.id.clone(),
                status: job.status,
            });
        }

        job.status = JobStatus::Analyzing;
        job.progress = 0;
        Ok(job.clone())
    }

    /// Store progress of an ANALYZING job; never lowers it
    pub fn record_progress(&self, job_id: &JobId, progress: u8) {
        self.update(job_id, |job| {
            if job.status == JobStatus::Analyzing {
                job.progress = job.progress.max(progress.min(100));
            }
        });
    }

    /// ANALYZING -> COMPLETED with progress 100
    pub fn complete(&self, job_id: &JobId) {
        self.update(job_id, |job| {
            if job.status == JobStatus::Analyzing {
                job.status = JobStatus::Completed;
                job.progress = 100;
            }
        });
    }

    fn update(&self, job_id: &str, apply: impl FnOnce(&mut SimulatedJob)) {
        let mut jobs = self.jobs.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(job) = jobs.iter_mut().find(|j| j.id == job_id) {
            apply(job);
        }
    }
}
