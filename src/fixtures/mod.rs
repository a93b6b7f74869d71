//! Hard-coded tables standing in for backend responses.
pub mod models;

use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

pub use models::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Venture projects shown on the dashboard
pub fn jobs() -> Vec<SimulatedJob> {
    vec![
        SimulatedJob {
            id: "1".to_string(),
            title: "AI-POWERED FITNESS APP".to_string(),
            description: "PERSONALIZED WORKOUT PLANS USING MACHINE LEARNING".to_string(),
            status: JobStatus::Analyzing,
            progress: 75,
            success_probability: 78,
            market_size: "$2.8B".to_string(),
            competition: Level::Medium,
            created_at: date(2024, 1, 15),
        },
        SimulatedJob {
            id: "2".to_string(),
            title: "SUSTAINABLE FOOD DELIVERY".to_string(),
            description: "ECO-FRIENDLY PACKAGING AND CARBON-NEUTRAL DELIVERY".to_string(),
            status: JobStatus::Completed,
            progress: 100,
            success_probability: 65,
            market_size: "$150B".to_string(),
            competition: Level::High,
            created_at: date(2024, 1, 10),
        },
        SimulatedJob {
            id: "3".to_string(),
            title: "REMOTE WORK PRODUCTIVITY TOOL".to_string(),
            description: "TEAM COLLABORATION PLATFORM FOR DISTRIBUTED TEAMS".to_string(),
            status: JobStatus::Pending,
            progress: 25,
            success_probability: 82,
            market_size: "$4.1B".to_string(),
            competition: Level::Medium,
            created_at: date(2024, 1, 20),
        },
    ]
}

pub fn trending_problems() -> Vec<TrendingProblem> {
    let rows = [
        ("1", "REMOTE WORK BURNOUT", "EMPLOYEES STRUGGLING WITH WORK-LIFE BALANCE IN DISTRIBUTED TEAMS", "+45%", "$2.1B", Level::Medium, 85),
        ("2", "SUSTAINABLE PACKAGING", "E-COMMERCE COMPANIES NEED ECO-FRIENDLY SHIPPING SOLUTIONS", "+67%", "$8.4B", Level::High, 92),
        ("3", "AI CONTENT MODERATION", "SOCIAL PLATFORMS REQUIRE AUTOMATED HARMFUL CONTENT DETECTION", "+123%", "$1.8B", Level::High, 78),
        ("4", "ELDERLY TECH ADOPTION", "SENIORS NEED SIMPLIFIED INTERFACES FOR DIGITAL SERVICES", "+34%", "$3.2B", Level::Low, 71),
    ];
    rows.into_iter()
        .map(|(id, title, description, trend, market_size, difficulty, opportunity)| TrendingProblem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            trend: trend.to_string(),
            market_size: market_size.to_string(),
            difficulty,
            opportunity,
        })
        .collect()
}

pub fn ai_opportunities() -> Vec<AiOpportunity> {
    let rows = [
        ("1", "VOICE-ACTIVATED GROCERY ORDERING", 89, "UNDERSERVED ELDERLY MARKET", Level::Low, "6-8 MONTHS"),
        ("2", "AI-POWERED PLANT CARE ASSISTANT", 76, "URBAN GARDENING BOOM", Level::Medium, "4-6 MONTHS"),
        ("3", "AUTOMATED MEETING SUMMARIZER", 94, "REMOTE WORK EFFICIENCY", Level::High, "3-4 MONTHS"),
    ];
    rows.into_iter()
        .map(|(id, title, confidence, market_gap, competition, time_to_market)| AiOpportunity {
            id: id.to_string(),
            title: title.to_string(),
            confidence,
            market_gap: market_gap.to_string(),
            competition,
            time_to_market: time_to_market.to_string(),
        })
        .collect()
}

pub fn discovered_problems() -> Vec<DiscoveredProblem> {
    let rows = [
        ("1", "REMOTE TEAM COMMUNICATION GAPS", "DISTRIBUTED TEAMS STRUGGLE WITH ASYNC COLLABORATION", Level::High, "$4.2B", 89),
        ("2", "SUSTAINABLE PACKAGING SHORTAGE", "E-COMMERCE LACKS ECO-FRIENDLY SHIPPING OPTIONS", Level::Medium, "$12.8B", 76),
        ("3", "AI BIAS IN HIRING SYSTEMS", "RECRUITMENT ALGORITHMS SHOW DEMOGRAPHIC BIAS", Level::High, "$2.1B", 94),
    ];
    rows.into_iter()
        .map(|(id, title, description, severity, market_size, trend_score)| DiscoveredProblem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            severity,
            market_size: market_size.to_string(),
            trend_score,
        })
        .collect()
}

/// Simulated AI problem search: waits `delay`, then filters the discovered problems.
///
/// Matching is a case-insensitive substring test on title and description;
/// a blank query returns everything.
pub async fn discover_problems(query: &str, delay: Duration) -> Vec<DiscoveredProblem> {
    debug!("Simulating problem discovery for query={:?}", query);
    tokio::time::sleep(delay).await;

    let needle = query.trim().to_uppercase();
    discovered_problems()
        .into_iter()
        .filter(|p| {
            needle.is_empty() || p.title.contains(&needle) || p.description.contains(&needle)
        })
        .collect()
}

pub fn trends() -> Vec<TrendCategory> {
    vec![
        TrendCategory {
            category: "AI & MACHINE LEARNING".to_string(),
            growth: "+156%".to_string(),
            momentum: 94,
            opportunities: 247,
            hot_topics: strings(&["GENERATIVE AI", "COMPUTER VISION", "NLP"]),
        },
        TrendCategory {
            category: "SUSTAINABLE TECH".to_string(),
            growth: "+89%".to_string(),
            momentum: 78,
            opportunities: 189,
            hot_topics: strings(&["CARBON CAPTURE", "RENEWABLE ENERGY", "CIRCULAR ECONOMY"]),
        },
        TrendCategory {
            category: "REMOTE WORK TOOLS".to_string(),
            growth: "+67%".to_string(),
            momentum: 85,
            opportunities: 156,
            hot_topics: strings(&["VIRTUAL COLLABORATION", "PRODUCTIVITY", "WELLNESS"]),
        },
        TrendCategory {
            category: "FINTECH INNOVATION".to_string(),
            growth: "+45%".to_string(),
            momentum: 72,
            opportunities: 134,
            hot_topics: strings(&["DEFI", "DIGITAL PAYMENTS", "ROBO-ADVISORS"]),
        },
    ]
}

pub fn research_jobs() -> Vec<ResearchJob> {
    let rows = [
        ("1", "FINTECH DISRUPTION ANALYSIS", ResearchStatus::Running, 67, "2H 15M", "1,247", "89"),
        ("2", "SUSTAINABLE TECH TRENDS", ResearchStatus::Completed, 100, "DONE", "3,891", "156"),
        ("3", "AI HEALTHCARE OPPORTUNITIES", ResearchStatus::Queued, 0, "PENDING", "0", "0"),
    ];
    rows.into_iter()
        .map(|(id, title, status, progress, time_remaining, data_points, insights)| ResearchJob {
            id: id.to_string(),
            title: title.to_string(),
            status,
            progress,
            time_remaining: time_remaining.to_string(),
            data_points: data_points.to_string(),
            insights: insights.to_string(),
        })
        .collect()
}

pub fn research_parameters() -> Vec<ResearchParameter> {
    vec![
        ResearchParameter {
            title: "MARKET DEPTH".to_string(),
            description: "HOW DEEP TO ANALYZE MARKET SEGMENTS".to_string(),
            value: 75,
            options: strings(&["SURFACE", "MODERATE", "DEEP", "COMPREHENSIVE"]),
        },
        ResearchParameter {
            title: "COMPETITOR ANALYSIS".to_string(),
            description: "LEVEL OF COMPETITIVE INTELLIGENCE".to_string(),
            value: 60,
            options: strings(&["BASIC", "STANDARD", "ADVANCED", "ENTERPRISE"]),
        },
        ResearchParameter {
            title: "TREND SENSITIVITY".to_string(),
            description: "HOW QUICKLY TO DETECT MARKET CHANGES".to_string(),
            value: 90,
            options: strings(&["WEEKLY", "DAILY", "HOURLY", "REAL-TIME"]),
        },
        ResearchParameter {
            title: "DATA SOURCES".to_string(),
            description: "NUMBER OF INFORMATION CHANNELS".to_string(),
            value: 85,
            options: strings(&["LIMITED", "STANDARD", "EXTENSIVE", "UNLIMITED"]),
        },
    ]
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    [
        ("TOTAL PROJECTS", "12"),
        ("SUCCESS RATE", "73%"),
        ("MARKET VALUE", "$2.1B"),
        ("ACTIVE RESEARCH", "5"),
    ]
    .into_iter()
    .map(|(title, value)| DashboardStat {
        title: title.to_string(),
        value: value.to_string(),
    })
    .collect()
}

pub fn admin_stats() -> AdminStats {
    AdminStats {
        total_users: 12847,
        active_users: 3421,
        total_jobs: 45623,
        completed_jobs: 42156,
        revenue: 89420,
        conversion_rate: 23.4,
    }
}

pub fn system_health() -> SystemHealth {
    SystemHealth {
        api_status: ServiceStatus::Healthy,
        db_status: ServiceStatus::Healthy,
        ai_service_status: ServiceStatus::Warning,
        cpu_usage: 67,
        memory_usage: 45,
        disk_usage: 23,
        response_time_ms: 145,
    }
}

pub fn recent_users() -> Vec<RecentUser> {
    let rows = [
        (1, "john@example.com", date(2024, 1, 15), 5, UserTier::Active),
        (2, "sarah@startup.com", date(2024, 1, 14), 12, UserTier::Premium),
        (3, "mike@venture.io", date(2024, 1, 13), 3, UserTier::Active),
        (4, "lisa@tech.com", date(2024, 1, 12), 8, UserTier::Active),
        (5, "david@innovation.co", date(2024, 1, 11), 15, UserTier::Premium),
    ];
    rows.into_iter()
        .map(|(id, email, join_date, jobs, status)| RecentUser {
            id,
            email: email.to_string(),
            join_date,
            jobs,
            status,
        })
        .collect()
}

/// Canned research report for a finished job; `None` until the job is COMPLETED.
///
/// Market size, competition and the success probability come from the job
/// itself; everything else is the same boilerplate for every job.
pub fn research_results(job: &SimulatedJob) -> Option<ResearchResults> {
    if job.status != JobStatus::Completed {
        return None;
    }

    Some(ResearchResults {
        job_id: job.id.clone(),
        market_analysis: MarketAnalysis {
            market_size: format!("{} GLOBAL MARKET", job.market_size),
            growth_rate: "24% YOY".to_string(),
            target_audience: "HEALTH-CONSCIOUS MILLENNIALS AND GEN Z".to_string(),
            competition_level: job.competition,
            market_trends: strings(&[
                "AI PERSONALIZATION DRIVING 340% HIGHER ENGAGEMENT",
                "WEARABLE INTEGRATION BECOMING STANDARD",
                "CORPORATE WELLNESS BUDGETS UP 45%",
                "MOBILE-FIRST APPROACH ESSENTIAL",
            ]),
        },
        solution_proposals: vec![SolutionProposal {
            title: "AI-POWERED CORE SOLUTION".to_string(),
            description: "COMPREHENSIVE BUSINESS SOLUTION WITH STEP-BY-STEP IMPLEMENTATION".to_string(),
            features: strings(&[
                "PERSONALIZED AI COACHING ENGINE",
                "REAL-TIME FORM CORRECTION",
                "SOCIAL COMMUNITY FEATURES",
                "CORPORATE WELLNESS INTEGRATION",
            ]),
            implementation_timeline: "6-8 MONTHS TO MVP".to_string(),
            estimated_cost: "$150K-250K DEVELOPMENT".to_string(),
        }],
        infrastructure_blueprint: InfrastructureBlueprint {
            tech_stack: "REACT NATIVE, NODE.JS, POSTGRESQL, TENSORFLOW".to_string(),
            architecture: "MICROSERVICES WITH API GATEWAY".to_string(),
            cloud_services: "AWS WITH AUTO-SCALING".to_string(),
            timeline: "4-6 MONTHS TO PRODUCTION-READY MVP".to_string(),
        },
        success_metrics: SuccessMetrics {
            success_probability: job.success_probability,
            key_insights: strings(&[
                "STRONG MARKET DEMAND FOR AI-POWERED PERSONALIZATION",
                "FIRST-MOVER ADVANTAGE IN SPECIFIC NICHE MARKETS",
                "HIGH USER RETENTION POTENTIAL THROUGH COMMUNITY FEATURES",
            ]),
            risk_factors: strings(&[
                "HIGH CUSTOMER ACQUISITION COSTS IN COMPETITIVE MARKET",
                "NEED FOR CONTINUOUS AI MODEL IMPROVEMENT",
                "REGULATORY COMPLIANCE FOR HEALTH DATA",
            ]),
            recommendations: strings(&[
                "FOCUS ON UNIQUE AI DIFFERENTIATION",
                "BUILD STRONG COMMUNITY FEATURES EARLY",
                "IMPLEMENT FREEMIUM MODEL TO REDUCE ENTRY BARRIERS",
            ]),
        },
    })
}
