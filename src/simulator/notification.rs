use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use super::engine::STAGE_LABELS;

pub const COMPLETION_TITLE: &str = "RESEARCH COMPLETE!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationKind {
    /// Stage boundary crossed; `stage` indexes `STAGE_LABELS`
    Milestone { stage: usize },
    Completed,
}

/// A toast produced by the simulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationEvent {
    pub job_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub progress: u8,
}

impl NotificationEvent {
    pub fn milestone(job_id: &str, stage: usize, progress: u8) -> Self {
        Self {
            job_id: job_id.to_string(),
            kind: NotificationKind::Milestone { stage },
            title: STAGE_LABELS[stage].to_string(),
            description: format!("RESEARCH PROGRESS: {}%", progress),
            progress,
        }
    }

    pub fn completed(job_id: &str, job_title: &str, success_probability: u8) -> Self {
        Self {
            job_id: job_id.to_string(),
            kind: NotificationKind::Completed,
            title: COMPLETION_TITLE.to_string(),
            description: format!(
                "{} ANALYZED WITH {}% SUCCESS PROBABILITY!",
                job_title, success_probability
            ),
            progress: 100,
        }
    }
}

/// Destination for simulator toasts.
///
/// Called while the run's state lock is held, so implementations must not block.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, event: NotificationEvent);
}

impl NotificationSink for mpsc::UnboundedSender<NotificationEvent> {
    fn notify(&self, event: NotificationEvent) {
        if self.send(event).is_err() {
            debug!("Notification receiver dropped, discarding toast");
        }
    }
}
