//! Presentation model: which view is active and what it shows.
pub mod navigator;
pub mod tone;
pub mod view_model;

use serde::{Deserialize, Serialize};

pub use navigator::Navigator;
pub use tone::{gauge_tone, JobKind, Tone};
pub use view_model::{AdminOverview, DashboardViewModel, JobCardView};

/// Sidebar entries of the signed-in dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Dashboard,
    Brainstorm,
    Research,
    Reports,
    Profile,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Brainstorm,
        Section::Research,
        Section::Reports,
        Section::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "DASHBOARD",
            Section::Brainstorm => "BRAINSTORM",
            Section::Research => "RESEARCH",
            Section::Reports => "REPORTS",
            Section::Profile => "PROFILE",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "DASHBOARD",
            Section::Brainstorm => "BRAINSTORM & VALIDATE",
            Section::Research => "MARKET RESEARCH",
            Section::Reports => "REPORTS",
            Section::Profile => "PROFILE",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Section::Dashboard => "MONITOR YOUR VENTURE PORTFOLIO",
            Section::Brainstorm => "DISCOVER AND VALIDATE NEW OPPORTUNITIES",
            Section::Research => "CONFIGURE AUTOMATED MARKET ANALYSIS",
            Section::Reports => "ANALYZE YOUR VENTURE PERFORMANCE",
            Section::Profile => "MANAGE YOUR ACCOUNT SETTINGS",
        }
    }
}

/// Every top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "view", content = "section", rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    Dashboard(Section),
    CreateProject,
    Admin,
}

impl View {
    /// Landing is the only view reachable without a session
    pub fn requires_session(self) -> bool {
        !matches!(self, View::Landing)
    }

    pub fn requires_admin(self) -> bool {
        matches!(self, View::Admin)
    }
}
