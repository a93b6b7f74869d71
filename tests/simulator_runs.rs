use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use ventureforge::fixtures::JobStatus;
use ventureforge::simulator::{
    runner, FixedIncrement, IncrementSource, IncrementStrategy, NotificationEvent, NotificationKind,
    RandomIncrement, RunState, SimulationHandle, SimulationRegistry, SimulationSettings,
    SimulatorError,
};
use ventureforge::store::{JobBoard, NotificationFeed};

const PERIOD: Duration = Duration::from_millis(800);

/// Just past `n` periods, so the n-th tick has fired and the next has not
fn after_ticks(n: u32) -> Duration {
    PERIOD * n + Duration::from_millis(100)
}

fn start_pending_job(
    increments: Box<dyn IncrementSource>,
) -> (JobBoard, SimulationHandle, mpsc::UnboundedReceiver<NotificationEvent>) {
    let board = JobBoard::from_fixtures();
    let job = board.begin_analysis("3").expect("job 3 is pending");
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = runner::spawn(&job, PERIOD, increments, board.clone(), Arc::new(tx));
    (board, handle, rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<NotificationEvent>) -> Vec<NotificationEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn fixed_increment_run_completes_on_sixth_tick_and_stops_its_timer() {
    let (board, handle, mut rx) = start_pending_job(Box::new(FixedIncrement(17.0)));

    sleep(after_ticks(5)).await;
    assert_eq!(handle.progress(), 85);
    assert_eq!(board.get("3").expect("job").status, JobStatus::Analyzing);

    sleep(PERIOD).await;
    assert_eq!(handle.state(), RunState::Completed);
    assert_eq!(handle.ticks(), 6);

    let events = drain(&mut rx);
    assert_eq!(events.len(), 7);
    let milestones: Vec<u8> = events
        .iter()
        .filter(|e| matches!(e.kind, NotificationKind::Milestone { .. }))
        .map(|e| e.progress)
        .collect();
    assert_eq!(milestones, vec![17, 34, 51, 68, 85, 100]);
    assert_eq!(events[6].kind, NotificationKind::Completed);
    assert_eq!(events[6].title, "RESEARCH COMPLETE!");

    let job = board.get("3").expect("job");
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.progress, 100);

    // No seventh tick
    sleep(PERIOD * 5).await;
    assert_eq!(handle.ticks(), 6);
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_further_notifications() {
    let (board, handle, mut rx) = start_pending_job(Box::new(FixedIncrement(17.0)));

    sleep(after_ticks(2)).await;
    assert!(handle.cancel());
    assert_eq!(handle.state(), RunState::Cancelled);
    let before = drain(&mut rx);
    assert_eq!(before.len(), 2);

    sleep(PERIOD * 10).await;
    assert_eq!(handle.ticks(), 2);
    assert!(drain(&mut rx).is_empty());

    let job = board.get("3").expect("job");
    assert_eq!(job.status, JobStatus::Analyzing);
    assert_eq!(job.progress, 34);

    assert!(!handle.cancel());
    assert_eq!(handle.wait().await, RunState::Cancelled);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_releases_the_timer() {
    let (_board, handle, mut rx) = start_pending_job(Box::new(FixedIncrement(17.0)));

    sleep(after_ticks(1)).await;
    drop(handle);
    assert_eq!(drain(&mut rx).len(), 1);

    sleep(PERIOD * 10).await;
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn random_run_fires_stages_in_order_with_rising_progress() {
    let (board, handle, mut rx) = start_pending_job(Box::new(RandomIncrement::seeded(42, 5.0, 20.0)));

    let mut last_board_progress = 0;
    for _ in 0..25 {
        sleep(PERIOD).await;
        let progress = board.get("3").expect("job").progress;
        assert!(progress >= last_board_progress);
        last_board_progress = progress;
    }

    assert_eq!(handle.state(), RunState::Completed);
    // 100 / 20 rounds up to 5 ticks at best, 100 / 5 is 20 at worst
    assert!((5..=20).contains(&handle.ticks()));

    let events = drain(&mut rx);
    let milestones: Vec<(usize, u8)> = events
        .iter()
        .filter_map(|e| match e.kind {
            NotificationKind::Milestone { stage } => Some((stage, e.progress)),
            NotificationKind::Completed => None,
        })
        .collect();
    assert!((1..=6).contains(&milestones.len()));
    let stages: Vec<usize> = milestones.iter().map(|&(stage, _)| stage).collect();
    assert_eq!(stages, (0..milestones.len()).collect::<Vec<_>>());
    assert!(milestones.windows(2).all(|w| w[0].1 < w[1].1));
    assert_eq!(events.last().map(|e| e.kind.clone()), Some(NotificationKind::Completed));
}

/// Replays a fixed list of increments, then repeats the last one
struct Scripted {
    steps: VecDeque<f64>,
    last: f64,
}

impl Scripted {
    fn new(steps: &[f64]) -> Self {
        Self {
            steps: steps.iter().copied().collect(),
            last: steps.last().copied().unwrap_or(10.0),
        }
    }
}

impl IncrementSource for Scripted {
    fn next_increment(&mut self) -> f64 {
        self.steps.pop_front().unwrap_or(self.last)
    }
}

#[tokio::test(start_paused = true)]
async fn tick_crossing_two_boundaries_fires_one_toast_per_tick() {
    let (_board, handle, mut rx) = start_pending_job(Box::new(Scripted::new(&[15.0, 19.0])));

    sleep(PERIOD * 10).await;
    assert_eq!(handle.state(), RunState::Completed);

    let milestones: Vec<(usize, u8)> = drain(&mut rx)
        .into_iter()
        .filter_map(|e| match e.kind {
            NotificationKind::Milestone { stage } => Some((stage, e.progress)),
            NotificationKind::Completed => None,
        })
        .collect();
    assert_eq!(milestones, vec![(0, 34), (1, 53), (2, 72), (3, 91), (4, 100)]);
}

fn registry(board: &JobBoard, feed: &NotificationFeed) -> SimulationRegistry {
    SimulationRegistry::new(
        board.clone(),
        Arc::new(feed.clone()),
        SimulationSettings {
            tick_interval: PERIOD,
            increments: IncrementStrategy::Fixed(17.0),
        },
    )
}

#[tokio::test(start_paused = true)]
async fn registry_keeps_a_single_timer_per_job() {
    let board = JobBoard::from_fixtures();
    let feed = NotificationFeed::new(50);
    let registry = registry(&board, &feed);

    let job = registry.start("3").expect("start");
    assert_eq!(job.status, JobStatus::Analyzing);
    assert_eq!(job.progress, 0);

    assert_eq!(
        registry.start("3"),
        Err(SimulatorError::AlreadyRunning("3".to_string()))
    );
    assert_eq!(registry.active_count(), 1);

    sleep(after_ticks(1)).await;
    // One timer means one increment per period
    assert_eq!(board.get("3").expect("job").progress, 17);
    assert_eq!(feed.len(), 1);

    sleep(PERIOD * 10).await;
    assert_eq!(registry.state("3"), Some(RunState::Completed));
    assert_eq!(registry.active_count(), 0);
    assert_eq!(feed.drain().len(), 7);

    // The finished run is kept for reporting and cannot be replaced by a second one
    assert!(matches!(
        registry.start("3"),
        Err(SimulatorError::NotPending {
            status: JobStatus::Completed,
            ..
        })
    ));
    assert_eq!(registry.state("3"), Some(RunState::Completed));
}

#[tokio::test(start_paused = true)]
async fn registry_rejects_jobs_that_cannot_start() {
    let board = JobBoard::from_fixtures();
    let registry = registry(&board, &NotificationFeed::new(50));

    assert_eq!(
        registry.start("404"),
        Err(SimulatorError::UnknownJob("404".to_string()))
    );
    assert!(matches!(
        registry.start("2"),
        Err(SimulatorError::NotPending {
            status: JobStatus::Completed,
            ..
        })
    ));
    assert_eq!(
        registry.cancel("3"),
        Err(SimulatorError::NotRunning("3".to_string()))
    );
    assert_eq!(registry.active_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_every_live_run() {
    let board = JobBoard::from_fixtures();
    let feed = NotificationFeed::new(50);
    let registry = registry(&board, &feed);

    registry.start("3").expect("start");
    sleep(after_ticks(1)).await;
    registry.shutdown().await;

    assert_eq!(registry.active_count(), 0);
    assert_eq!(registry.state("3"), None);

    let toasts = feed.drain().len();
    sleep(PERIOD * 10).await;
    assert_eq!(toasts, 1);
    assert!(feed.is_empty());
}
