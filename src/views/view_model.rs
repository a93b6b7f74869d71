use chrono::NaiveDate;
use serde::Serialize;

use crate::fixtures::{
    self, AdminStats, AiOpportunity, DashboardStat, JobStatus, Level, RecentUser, ResearchJob,
    ResearchParameter, SimulatedJob, SystemHealth, TrendingProblem,
};

use super::tone::{gauge_tone, JobKind, Tone};
use super::Section;

pub const START_ACTION: &str = "START AI RESEARCH";
pub const RUNNING_ACTION: &str = "RESEARCHING...";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: JobKind,
    pub status: JobStatus,
    pub status_tone: Tone,
    pub progress: u8,
    pub success_probability: u8,
    pub gauge_tone: Tone,
    pub market_size: String,
    pub competition: Level,
    pub competition_tone: Tone,
    pub created_at: NaiveDate,
    /// Label of the run button; `None` hides it
    pub action: Option<&'static str>,
}

impl JobCardView {
    pub fn new(job: &SimulatedJob, running: bool) -> Self {
        let action = match job.status {
            JobStatus::Pending => Some(START_ACTION),
            JobStatus::Analyzing if running => Some(RUNNING_ACTION),
            _ => None,
        };

        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            description: job.description.clone(),
            kind: JobKind::from_title(&job.title),
            status: job.status,
            status_tone: job.status.into(),
            progress: job.progress,
            success_probability: job.success_probability,
            gauge_tone: gauge_tone(job.success_probability),
            market_size: job.market_size.clone(),
            competition: job.competition,
            competition_tone: job.competition.into(),
            created_at: job.created_at,
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarItem {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionContent {
    Dashboard {
        stats: Vec<DashboardStat>,
        jobs: Vec<JobCardView>,
    },
    Brainstorm {
        trending_problems: Vec<TrendingProblem>,
        opportunities: Vec<AiOpportunity>,
    },
    Research {
        parameters: Vec<ResearchParameter>,
        active_research: Vec<ResearchJob>,
    },
    /// Reports and profile have no content yet
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub section: Section,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sidebar: Vec<SidebarItem>,
    pub content: SectionContent,
}

impl DashboardViewModel {
    /// Build the signed-in dashboard for `section`.
    ///
    /// `query` filters job cards by title or description, ignoring case;
    /// `is_running` reports whether a job has a live simulation.
    pub fn build(
        section: Section,
        jobs: &[SimulatedJob],
        query: Option<&str>,
        is_running: impl Fn(&str) -> bool,
    ) -> Self {
        let sidebar = Section::ALL
            .iter()
            .map(|&s| SidebarItem {
                section: s,
                label: s.label(),
                active: s == section,
            })
            .collect();

        let content = match section {
            Section::Dashboard => {
                let needle = query.map(|q| q.trim().to_uppercase()).unwrap_or_default();
                let cards = jobs
                    .iter()
                    .filter(|j| {
                        needle.is_empty()
                            || j.title.to_uppercase().contains(&needle)
                            || j.description.to_uppercase().contains(&needle)
                    })
                    .map(|j| JobCardView::new(j, is_running(&j.id)))
                    .collect();
                SectionContent::Dashboard {
                    stats: fixtures::dashboard_stats(),
                    jobs: cards,
                }
            }
            Section::Brainstorm => SectionContent::Brainstorm {
                trending_problems: fixtures::trending_problems(),
                opportunities: fixtures::ai_opportunities(),
            },
            Section::Research => SectionContent::Research {
                parameters: fixtures::research_parameters(),
                active_research: fixtures::research_jobs(),
            },
            Section::Reports | Section::Profile => SectionContent::Empty,
        };

        Self {
            section,
            title: section.title(),
            subtitle: section.subtitle(),
            sidebar,
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminOverview {
    pub stats: AdminStats,
    pub health: SystemHealth,
    pub recent_users: Vec<RecentUser>,
}

impl AdminOverview {
    pub fn load() -> Self {
        Self {
            stats: fixtures::admin_stats(),
            health: fixtures::system_health(),
            recent_users: fixtures::recent_users(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_job_offers_the_start_action() {
        let jobs = fixtures::jobs();
        let vm = DashboardViewModel::build(Section::Dashboard, &jobs, None, |_| false);

        let SectionContent::Dashboard { jobs: cards, stats } = vm.content else {
            panic!("dashboard content expected");
        };
        assert_eq!(stats.len(), 4);
        let actions: Vec<_> = cards.iter().map(|c| c.action).collect();
        assert_eq!(actions, vec![None, None, Some(START_ACTION)]);
        assert_eq!(cards[2].gauge_tone, Tone::Lime);
    }

    #[test]
    fn search_filters_job_cards() {
        let jobs = fixtures::jobs();
        let vm = DashboardViewModel::build(Section::Dashboard, &jobs, Some("food"), |_| false);
        let SectionContent::Dashboard { jobs: cards, .. } = vm.content else {
            panic!("dashboard content expected");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "2");
    }

    #[test]
    fn running_job_shows_researching() {
        let mut jobs = fixtures::jobs();
        jobs[2].status = JobStatus::Analyzing;
        let card = JobCardView::new(&jobs[2], true);
        assert_eq!(card.action, Some(RUNNING_ACTION));
    }

    #[test]
    fn sidebar_marks_only_the_active_section() {
        let vm = DashboardViewModel::build(Section::Research, &[], None, |_| false);
        let active: Vec<_> = vm.sidebar.iter().filter(|i| i.active).map(|i| i.section).collect();
        assert_eq!(active, vec![Section::Research]);
        assert_eq!(vm.title, "MARKET RESEARCH");
    }
}
