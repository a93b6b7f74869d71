use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a job on the board ("1", "2", ...)
pub type JobId = String;

/// Job lifecycle. Transitions only move forward: PENDING -> ANALYZING -> COMPLETED.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Analyzing,
    Completed,
}

/// Coarse rating used for competition, difficulty and severity columns
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// A venture idea under (simulated) AI research
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SimulatedJob {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub status: JobStatus,
    pub progress: u8,
    pub success_probability: u8,
    pub market_size: String,
    pub competition: Level,
    pub created_at: NaiveDate,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TrendingProblem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub trend: String,
    pub market_size: String,
    pub difficulty: Level,
    pub opportunity: u8,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AiOpportunity {
    pub id: String,
    pub title: String,
    pub confidence: u8,
    pub market_gap: String,
    pub competition: Level,
    pub time_to_market: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DiscoveredProblem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Level,
    pub market_size: String,
    pub trend_score: u8,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TrendCategory {
    pub category: String,
    pub growth: String,
    pub momentum: u8,
    pub opportunities: u32,
    pub hot_topics: Vec<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResearchStatus {
    Running,
    Completed,
    Queued,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResearchJob {
    pub id: String,
    pub title: String,
    pub status: ResearchStatus,
    pub progress: u8,
    pub time_remaining: String,
    pub data_points: String,
    pub insights: String,
}

/// A tunable knob of the market research configuration screen
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResearchParameter {
    pub title: String,
    pub description: String,
    pub value: u8,
    pub options: Vec<String>,
}

impl ResearchParameter {
    /// Option highlighted for the current value: one option per 25 points.
    pub fn selected_option(&self) -> Option<&str> {
        let index = usize::from(self.value / 25).min(self.options.len().saturating_sub(1));
        self.options.get(index).map(String::as_str)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AdminStats {
    pub total_users: u32,
    pub active_users: u32,
    pub total_jobs: u32,
    pub completed_jobs: u32,
    pub revenue: u32,
    pub conversion_rate: f64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Healthy,
    Warning,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SystemHealth {
    pub api_status: ServiceStatus,
    pub db_status: ServiceStatus,
    pub ai_service_status: ServiceStatus,
    pub cpu_usage: u8,
    pub memory_usage: u8,
    pub disk_usage: u8,
    pub response_time_ms: u32,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserTier {
    Active,
    Premium,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RecentUser {
    pub id: u32,
    pub email: String,
    pub join_date: NaiveDate,
    pub jobs: u32,
    pub status: UserTier,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MarketAnalysis {
    pub market_size: String,
    pub growth_rate: String,
    pub target_audience: String,
    pub competition_level: Level,
    pub market_trends: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SolutionProposal {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub implementation_timeline: String,
    pub estimated_cost: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InfrastructureBlueprint {
    pub tech_stack: String,
    pub architecture: String,
    pub cloud_services: String,
    pub timeline: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SuccessMetrics {
    pub success_probability: u8,
    pub key_insights: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Report shown for a COMPLETED job
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResearchResults {
    pub job_id: JobId,
    pub market_analysis: MarketAnalysis,
    pub solution_proposals: Vec<SolutionProposal>,
    pub infrastructure_blueprint: InfrastructureBlueprint,
    pub success_metrics: SuccessMetrics,
}
