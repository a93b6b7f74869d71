//! Timer-driven research progress simulator.
//!
//! `engine` is the clock-free state machine, `runner` drives one engine from a
//! tokio interval, and `registry` keeps at most one live run per job.
pub mod engine;
pub mod increment;
pub mod notification;
pub mod registry;
pub mod runner;

use std::fmt;

use crate::fixtures::{JobId, JobStatus};

pub use engine::{stage_boundary, ProgressEngine, RunState, TickOutcome, STAGE_LABELS};
pub use increment::{FixedIncrement, IncrementSource, IncrementStrategy, RandomIncrement};
pub use notification::{NotificationEvent, NotificationKind, NotificationSink, COMPLETION_TITLE};
pub use registry::{SimulationRegistry, SimulationSettings};
pub use runner::SimulationHandle;

/// Simulator-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatorError {
    /// No job with this id on the board
    UnknownJob(JobId),

    /// A live run already owns the timer for this job
    AlreadyRunning(JobId),

    /// Only PENDING jobs can be started
    NotPending { job_id: JobId, status: JobStatus },

    /// Cancel requested but no live run exists
    NotRunning(JobId),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::UnknownJob(id) => write!(f, "Job not found: {}", id),
            SimulatorError::AlreadyRunning(id) => write!(f, "Job {} is already running", id),
            SimulatorError::NotPending { job_id, status } => {
                write!(f, "Job {} cannot start from status {:?}", job_id, status)
            }
            SimulatorError::NotRunning(id) => write!(f, "Job {} has no running simulation", id),
        }
    }
}

impl std::error::Error for SimulatorError {}
