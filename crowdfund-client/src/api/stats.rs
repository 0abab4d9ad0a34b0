//! Admin dashboard statistics
//!
//! Always fetched fresh; the tags only let backing and project mutations
//! name the charts they affect.

use shared::ActionResult;
use shared::models::TopUsersKind;
use shared::response::{
    BackingsRefundsEnvelope, CategoriesEnvelope, GeneralStatsEnvelope, GrowthEnvelope,
    OverviewEnvelope, TopProjectsEnvelope, TopUsersEnvelope,
};

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;

pub const GENERAL_STATS: Endpoint = Endpoint::read("general_stats", Tag::StatsGeneral).authenticated();
pub const OVERVIEW: Endpoint = Endpoint::read("overview", Tag::StatsOverview).authenticated();
pub const TOP_PROJECTS: Endpoint = Endpoint::read("top_projects", Tag::StatsTopProjects).authenticated();
pub const TOP_USERS: Endpoint = Endpoint::read("top_users", Tag::StatsTopUsers).authenticated();
pub const CATEGORIES: Endpoint =
    Endpoint::read("categories_distribution", Tag::StatsCategories).authenticated();
pub const CREATORS_BACKERS: Endpoint =
    Endpoint::read("creators_and_backers", Tag::StatsCreatorsBackers).authenticated();
pub const BACKINGS_REFUNDS: Endpoint =
    Endpoint::read("backings_and_refunds", Tag::StatsBackingsRefunds).authenticated();

// ========== Stats API ==========

impl CrowdfundClient {
    pub async fn general_stats(&self) -> ActionResult<GeneralStatsEnvelope> {
        self.send(&GENERAL_STATS, "stats/general").await
    }

    pub async fn overview(&self) -> ActionResult<OverviewEnvelope> {
        self.send(&OVERVIEW, "stats/overview").await
    }

    pub async fn top_projects(&self) -> ActionResult<TopProjectsEnvelope> {
        self.send(&TOP_PROJECTS, "stats/topProjects").await
    }

    pub async fn top_users(&self, kind: TopUsersKind) -> ActionResult<TopUsersEnvelope> {
        self.send(&TOP_USERS, format!("stats/{}", kind.path())).await
    }

    pub async fn categories_distribution(&self) -> ActionResult<CategoriesEnvelope> {
        self.send(&CATEGORIES, "stats/categoriesDist").await
    }

    /// New creators and backers per month
    pub async fn creators_and_backers(&self) -> ActionResult<GrowthEnvelope> {
        self.send(&CREATORS_BACKERS, "stats/creatorsNbackers").await
    }

    pub async fn backings_and_refunds(&self) -> ActionResult<BackingsRefundsEnvelope> {
        self.send(&BACKINGS_REFUNDS, "stats/backingsNrefunds").await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::scripted_client;
    use serde_json::json;
    use shared::models::TopUsersKind;

    #[tokio::test]
    async fn test_general_stats_never_cached() {
        let (client, http, _) = scripted_client();
        http.push_json(200, json!({"message": "ok", "stats": {"total_projects": 4, "successful_projects": 1, "failed_projects": 1}}));
        http.push_json(200, json!({"message": "ok", "stats": {"total_projects": 5, "successful_projects": 2, "failed_projects": 1}}));

        let first = client.general_stats().await;
        let second = client.general_stats().await;

        assert_eq!(first.payload().map(|s| s.stats.total_projects), Some(4));
        assert_eq!(second.payload().map(|s| s.stats.total_projects), Some(5));
        assert_eq!(second.payload().map(|s| s.stats.success_rate()), Some(66.67));
        assert_eq!(http.requests().len(), 2);
        assert_eq!(http.last_request().bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_top_backers_path_and_envelope() {
        let (client, http, _) = scripted_client();
        http.push_json(200, json!({"message": "ok", "backers": [{"username": "ada", "project_count": 3, "total_raised": 120.0}]}));

        let result = client.top_users(TopUsersKind::Backers).await;

        assert_eq!(http.last_request().path, "stats/topBackers");
        let users = &result.payload().expect("success").users;
        assert_eq!(users[0].username, "ada");
    }

    #[tokio::test]
    async fn test_forbidden_dashboard() {
        let (client, http, _) = scripted_client();
        http.push_json(403, json!({"error": "your user account doesn't have the necessary permissions to access this resource"}));

        let result = client.backings_and_refunds().await;

        assert!(!result.status());
        assert_eq!(
            result.failure().and_then(|e| e.http_status()).map(|s| s.as_u16()),
            Some(403)
        );
    }
}
