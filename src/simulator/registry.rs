use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::fixtures::{JobId, SimulatedJob};
use crate::store::JobBoard;

use super::engine::RunState;
use super::increment::IncrementStrategy;
use super::notification::NotificationSink;
use super::runner::{self, SimulationHandle};
use super::SimulatorError;

/// Timer period and increment source for new runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub tick_interval: Duration,
    pub increments: IncrementStrategy,
}

impl SimulationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tick_interval: config.tick_interval,
            increments: IncrementStrategy::Random {
                min: config.increment_min,
                max: config.increment_max,
            },
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Live simulations keyed by job id.
///
/// Invariant: at most one `Running` handle per job, so at most one timer.
/// Finished handles stay in the map so `state` can report how a run ended.
/// Only PENDING jobs start and a run leaves the job non-PENDING, so each job
/// gets at most one entry and the map never outgrows the board.
#[derive(Clone)]
pub struct SimulationRegistry {
    runs: Arc<Mutex<HashMap<JobId, SimulationHandle>>>,
    board: JobBoard,
    sink: Arc<dyn NotificationSink>,
    settings: SimulationSettings,
}

impl SimulationRegistry {
    pub fn new(board: JobBoard, sink: Arc<dyn NotificationSink>, settings: SimulationSettings) -> Self {
        Self {
            runs: Arc::new(Mutex::new(HashMap::new())),
            board,
            sink,
            settings,
        }
    }

    fn runs(&self) -> MutexGuard<'_, HashMap<JobId, SimulationHandle>> {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn board(&self) -> &JobBoard {
        &self.board
    }

    /// Start simulated research for a PENDING job.
    ///
    /// # Returns
    /// - `Ok(SimulatedJob)` - the job, now ANALYZING
    /// - `Err(AlreadyRunning)` - a live run exists; no second timer is created
    /// - `Err(NotPending)` / `Err(UnknownJob)` - the job cannot be started
    pub fn start(&self, job_id: &str) -> Result<SimulatedJob, SimulatorError> {
        let mut runs = self.runs();

        if runs.get(job_id).is_some_and(SimulationHandle::is_running) {
            warn!("Ignoring start for job {}: simulation already running", job_id);
            return Err(SimulatorError::AlreadyRunning(job_id.to_string()));
        }

        let job = self.board.begin_analysis(job_id)?;
        let handle = runner::spawn(
            &job,
            self.settings.tick_interval,
            self.settings.increments.source(),
            self.board.clone(),
            self.sink.clone(),
        );

        runs.insert(job.id.clone(), handle);
        Ok(job)
    }

    /// Cancel the live run for a job
    pub fn cancel(&self, job_id: &str) -> Result<(), SimulatorError> {
        match self.runs().get(job_id) {
            Some(handle) if handle.cancel() => Ok(()),
            _ => Err(SimulatorError::NotRunning(job_id.to_string())),
        }
    }

    /// State of the most recent run for a job, if any was started
    pub fn state(&self, job_id: &str) -> Option<RunState> {
        self.runs().get(job_id).map(SimulationHandle::state)
    }

    pub fn is_running(&self, job_id: &str) -> bool {
        self.runs().get(job_id).is_some_and(SimulationHandle::is_running)
    }

    /// Number of runs currently holding a timer
    pub fn active_count(&self) -> usize {
        self.runs().values().filter(|h| h.is_running()).count()
    }

    /// Cancel every run and wait for their timer tasks to exit
    pub async fn shutdown(&self) {
        let handles: Vec<SimulationHandle> = self.runs().drain().map(|(_, h)| h).collect();
        let total = handles.len();
        info!("Shutting down {} simulation(s)...", total);

        for handle in handles {
            let job_id = handle.job_id().to_string();
            handle.cancel();
            let state = handle.wait().await;
            info!("Simulation for job {} stopped in state {:?}", job_id, state);
        }
    }
}
