use serde::{Deserialize, Serialize};

use crate::fixtures::{JobId, SimulatedJob};

use super::notification::NotificationEvent;

/// Canned toast titles, one per stage boundary, in firing order.
pub const STAGE_LABELS: [&str; 6] = [
    "INITIALIZING AI RESEARCH...",
    "ANALYZING MARKET DATA...",
    "EVALUATING COMPETITORS...",
    "GENERATING INSIGHTS...",
    "CALCULATING SUCCESS PROBABILITY...",
    "FINALIZING REPORT...",
];

/// Lifecycle of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Completed | RunState::Cancelled)
    }
}

/// Progress value at which stage `k` (1-based) fires.
pub fn stage_boundary(k: usize) -> f64 {
    (k * 100) as f64 / STAGE_LABELS.len() as f64
}

/// What a single tick produced
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub progress: u8,
    pub notifications: Vec<NotificationEvent>,
    pub completed: bool,
}

/// Time-free progress state machine.
///
/// The engine never looks at a clock: each call to [`ProgressEngine::tick`]
/// is one period of the recurring timer, and the caller supplies the
/// increment. Progress starts at zero for every run.
#[derive(Debug, Clone)]
pub struct ProgressEngine {
    job_id: JobId,
    job_title: String,
    success_probability: u8,
    progress: f64,
    next_stage: usize,
    ticks: u32,
    state: RunState,
}

impl ProgressEngine {
    pub fn new(job: &SimulatedJob) -> Self {
        Self {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            success_probability: job.success_probability,
            progress: 0.0,
            next_stage: 0,
            ticks: 0,
            state: RunState::Idle,
        }
    }

    /// Idle -> Running. Returns false for an engine that already started.
    pub fn start(&mut self) -> bool {
        if self.state == RunState::Idle {
            self.state = RunState::Running;
            true
        } else {
            false
        }
    }

    /// Advance by `increment` percentage points.
    ///
    /// Returns `None` unless the run is `Running`, so a tick racing a cancel
    /// or landing after completion has no effect.
    pub fn tick(&mut self, increment: f64) -> Option<TickOutcome> {
        if self.state != RunState::Running {
            return None;
        }

        self.ticks += 1;
        self.progress = (self.progress + increment.max(0.0)).min(100.0);
        let reported = self.progress();

        // At most one stage per tick; a second boundary crossed in the same
        // tick fires on the next one, so milestone progress strictly rises
        let mut notifications = Vec::new();
        if self.next_stage < STAGE_LABELS.len()
            && self.progress >= stage_boundary(self.next_stage + 1)
        {
            notifications.push(NotificationEvent::milestone(
                &self.job_id,
                self.next_stage,
                reported,
            ));
            self.next_stage += 1;
        }

        let completed = self.progress >= 100.0;
        if completed {
            self.state = RunState::Completed;
            notifications.push(NotificationEvent::completed(
                &self.job_id,
                &self.job_title,
                self.success_probability,
            ));
        }

        Some(TickOutcome {
            progress: reported,
            notifications,
            completed,
        })
    }

    /// Moves a running engine to `Cancelled`. Returns false if it was not running.
    pub fn cancel(&mut self) -> bool {
        if self.state == RunState::Running {
            self.state = RunState::Cancelled;
            true
        } else {
            false
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Rounded progress, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress.round().clamp(0.0, 100.0) as u8
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn milestones_fired(&self) -> usize {
        self.next_stage
    }
}
