use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::fixtures::{JobId, SimulatedJob};
use crate::store::JobBoard;

use super::engine::{ProgressEngine, RunState};
use super::increment::IncrementSource;
use super::notification::NotificationSink;

/// State shared by the timer task and the handle.
///
/// Both `tick` and `cancel` run under the same lock, so once `cancel` has
/// returned no tick can emit.
struct RunCore {
    engine: ProgressEngine,
    increments: Box<dyn IncrementSource>,
    board: JobBoard,
    sink: Arc<dyn NotificationSink>,
}

impl RunCore {
    /// One timer period. Returns false once the run is over.
    fn tick(&mut self) -> bool {
        let increment = self.increments.next_increment();
        let Some(outcome) = self.engine.tick(increment) else {
            return false;
        };

        let job_id: JobId = self.engine.job_id().to_string();
        debug!(
            "Job {} tick {}: +{:.1} -> {}%",
            job_id,
            self.engine.ticks(),
            increment,
            outcome.progress
        );

        if outcome.completed {
            self.board.complete(&job_id);
            info!("Job {} research completed after {} ticks", job_id, self.engine.ticks());
        } else {
            self.board.record_progress(&job_id, outcome.progress);
        }

        for event in outcome.notifications {
            self.sink.notify(event);
        }

        !outcome.completed
    }
}

fn lock(core: &Mutex<RunCore>) -> MutexGuard<'_, RunCore> {
    core.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owner of one running simulation and its recurring timer.
///
/// Dropping the handle cancels the run, which is how a torn-down view
/// releases its timer.
pub struct SimulationHandle {
    job_id: JobId,
    core: Arc<Mutex<RunCore>>,
    stop_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

/// Start a run for `job` and schedule its recurring tick.
///
/// The first tick fires one full `period` after the call. Must be called
/// from within a tokio runtime.
pub fn spawn(
    job: &SimulatedJob,
    period: Duration,
    increments: Box<dyn IncrementSource>,
    board: JobBoard,
    sink: Arc<dyn NotificationSink>,
) -> SimulationHandle {
    // Fresh engine per run, so this always moves Idle -> Running
    let mut engine = ProgressEngine::new(job);
    engine.start();

    let core = Arc::new(Mutex::new(RunCore {
        engine,
        increments,
        board,
        sink,
    }));

    let (stop_tx, stop_rx) = watch::channel(false);
    let task = tokio::spawn(run_loop(core.clone(), period, stop_rx));

    info!("Started research simulation for job {} ({})", job.id, job.title);

    SimulationHandle {
        job_id: job.id.clone(),
        core,
        stop_tx,
        task: Some(task),
    }
}

async fn run_loop(core: Arc<Mutex<RunCore>>, period: Duration, mut stop_rx: watch::Receiver<bool>) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = stop_rx.changed() => {
                debug!("Simulation task received stop signal");
                break;
            }
            _ = ticker.tick() => {
                if !lock(&core).tick() {
                    break;
                }
            }
        }
    }
}

impl SimulationHandle {
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn state(&self) -> RunState {
        lock(&self.core).engine.state()
    }

    pub fn progress(&self) -> u8 {
        lock(&self.core).engine.progress()
    }

    /// Number of ticks applied so far
    pub fn ticks(&self) -> u32 {
        lock(&self.core).engine.ticks()
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    /// Cancel a running simulation. Returns false if it had already finished.
    pub fn cancel(&self) -> bool {
        let cancelled = lock(&self.core).engine.cancel();
        if cancelled {
            info!("Cancelled research simulation for job {}", self.job_id);
        }
        // Wake the task even after completion; it may already be gone
        let _ = self.stop_tx.send(true);
        cancelled
    }

    /// Wait for the timer task to exit and return the final state.
    ///
    /// A running simulation is awaited to completion; call `cancel` first to stop early.
    pub async fn wait(mut self) -> RunState {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                error!("Simulation task for job {} failed: {:?}", self.job_id, e);
            }
        }
        self.state()
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        if self.cancel() {
            debug!("Simulation handle for job {} dropped while running", self.job_id);
        }
    }
}
