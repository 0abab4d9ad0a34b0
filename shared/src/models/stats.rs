//! Dashboard statistics

use serde::{Deserialize, Serialize};

/// Platform-wide totals on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralStats {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub total_money_raised: f64,
    #[serde(default)]
    pub successful_projects: u64,
    #[serde(default)]
    pub failed_projects: u64,
    #[serde(default)]
    pub total_backers: u64,
    #[serde(default)]
    pub total_creators: u64,
    #[serde(default)]
    pub total_backings: u64,
    #[serde(default)]
    pub total_refunds: u64,
}

impl GeneralStats {
    /// Share of finished projects that reached their goal, 0-100.
    pub fn success_rate(&self) -> f64 {
        let finished = self.successful_projects + self.failed_projects;
        if finished == 0 {
            return 0.0;
        }
        (self.successful_projects as f64 * 10000.0 / finished as f64).round() / 100.0
    }
}

/// Monthly project outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewEntry {
    pub project_month: String,
    #[serde(default)]
    pub successful_projects: u64,
    #[serde(default)]
    pub failed_projects: u64,
    #[serde(default)]
    pub total_projects: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopProject {
    pub title: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub total_raised: f64,
}

/// Top creator or top backer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopUser {
    pub username: String,
    #[serde(default)]
    pub project_count: u64,
    #[serde(default)]
    pub total_raised: f64,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    #[serde(default)]
    pub count: u64,
}

/// New creators and backers per month
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthEntry {
    pub month: String,
    #[serde(default)]
    pub creators: u64,
    #[serde(default)]
    pub backers: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackingsRefundsEntry {
    pub month: String,
    #[serde(default)]
    pub backings: u64,
    #[serde(default)]
    pub refunds: u64,
}

/// Which leaderboard `top_users` reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopUsersKind {
    Creators,
    Backers,
}

impl TopUsersKind {
    /// Path segment under `/stats`
    pub fn path(self) -> &'static str {
        match self {
            Self::Creators => "topCreators",
            Self::Backers => "topBackers",
        }
    }
}
