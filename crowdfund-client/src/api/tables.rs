//! Paged admin tables

use shared::ActionResult;
use shared::models::{BackingRow, Dispute, ProjectRow, UserRow};
use shared::request::PageQuery;
use shared::response::TablePage;

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;

pub const PROJECTS_TABLE: Endpoint = Endpoint::read("projects_table", Tag::ProjectsTable).authenticated();
pub const USERS_TABLE: Endpoint = Endpoint::read("users_table", Tag::UsersTable).authenticated();
pub const BACKINGS_TABLE: Endpoint = Endpoint::read("backings_table", Tag::BackingsTable).authenticated();
pub const DISPUTES_TABLE: Endpoint = Endpoint::read("disputes_table", Tag::DisputesTable).authenticated();

// ========== Tables API ==========

impl CrowdfundClient {
    pub async fn projects_table(&self, page: PageQuery) -> ActionResult<TablePage<ProjectRow>> {
        self.send_query(&PROJECTS_TABLE, "tables/projects", page.to_pairs())
            .await
    }

    pub async fn users_table(&self, page: PageQuery) -> ActionResult<TablePage<UserRow>> {
        self.send_query(&USERS_TABLE, "tables/users", page.to_pairs())
            .await
    }

    pub async fn backings_table(&self, page: PageQuery) -> ActionResult<TablePage<BackingRow>> {
        self.send_query(&BACKINGS_TABLE, "tables/backings", page.to_pairs())
            .await
    }

    pub async fn disputes_table(&self, page: PageQuery) -> ActionResult<TablePage<Dispute>> {
        self.send_query(&DISPUTES_TABLE, "tables/disputes", page.to_pairs())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::scripted_client;
    use serde_json::json;

    #[test]
    fn test_tables_have_own_tags() {
        assert_eq!(USERS_TABLE.cache_tag(), None);
        assert_ne!(USERS_TABLE.kind, PROJECTS_TABLE.kind);
        assert_ne!(BACKINGS_TABLE.kind, PROJECTS_TABLE.kind);
    }

    #[tokio::test]
    async fn test_users_table_rows() {
        let (client, http, _) = scripted_client();
        http.push_json(200, json!({
            "message": "users returned successfully",
            "table": [{"id": 1, "username": "ada", "email": "ada@example.org", "activated": true}],
            "metadata": {"current_page": 1, "page_size": 10, "first_page": 1, "last_page": 1, "total_records": 1}
        }));

        let result = client.users_table(PageQuery::default()).await;

        let page = result.payload().expect("success");
        assert_eq!(page.table[0].user_id, 1);
        assert!(!page.metadata.has_next());
        assert_eq!(http.last_request().cache_key(), "tables/users?page=1&page_size=10");
    }

    #[tokio::test]
    async fn test_backings_table_refetched_each_time() {
        let (client, http, _) = scripted_client();
        for _ in 0..2 {
            http.push_json(200, json!({"message": "ok", "table": [{"backing_id": 3, "amount": 2500}], "metadata": {}}));
        }

        client.backings_table(PageQuery::new(1, 20)).await;
        client.backings_table(PageQuery::new(1, 20)).await;

        assert_eq!(http.requests().len(), 2);
    }
}
