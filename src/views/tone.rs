use serde::Serialize;

use crate::fixtures::{JobStatus, Level, ResearchStatus};

/// Badge / gauge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Lime,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl From<JobStatus> for Tone {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Completed => Tone::Lime,
            JobStatus::Analyzing => Tone::Yellow,
            JobStatus::Pending => Tone::Red,
        }
    }
}

impl From<Level> for Tone {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => Tone::Lime,
            Level::Medium => Tone::Yellow,
            Level::High => Tone::Red,
        }
    }
}

impl From<ResearchStatus> for Tone {
    fn from(status: ResearchStatus) -> Self {
        match status {
            ResearchStatus::Running => Tone::Yellow,
            ResearchStatus::Completed => Tone::Lime,
            ResearchStatus::Queued => Tone::Red,
        }
    }
}

/// Success-probability gauge colour
pub fn gauge_tone(probability: u8) -> Tone {
    match probability {
        80.. => Tone::Lime,
        60..=79 => Tone::Yellow,
        40..=59 => Tone::Orange,
        _ => Tone::Red,
    }
}

/// Research track a job belongs to, derived from its title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    Validation,
    Solution,
    Infrastructure,
}

impl JobKind {
    /// Unknown titles count as validation work
    pub fn from_title(title: &str) -> Self {
        match title.trim().to_lowercase().as_str() {
            "solution" => JobKind::Solution,
            "infrastructure" => JobKind::Infrastructure,
            _ => JobKind::Validation,
        }
    }
}
