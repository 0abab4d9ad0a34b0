use shared::ActionResult;
use shared::request::{PageQuery, UpdateInput};
use shared::response::{MessageResponse, UpdatesPage};

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

/// Page size of the update feed under a project
pub const UPDATES_PAGE_SIZE: u32 = 5;

pub const PUBLISH_UPDATE: Endpoint =
    Endpoint::mutation("publish_update", Verb::Post, &[Tag::Updates]).authenticated();
pub const GET_UPDATES: Endpoint = Endpoint::cached("get_updates", Tag::Updates);
pub const DELETE_UPDATE: Endpoint =
    Endpoint::mutation("delete_update", Verb::Delete, &[Tag::Updates]).authenticated();

// ========== Updates API ==========

impl CrowdfundClient {
    pub async fn publish_update(&self, project_id: i64, update: &UpdateInput) -> ActionResult<MessageResponse> {
        self.send_json(&PUBLISH_UPDATE, format!("updates/create/{project_id}"), update)
            .await
    }

    /// One page of a project's updates, newest first. Pass `None` for the
    /// first page of the default size.
    pub async fn get_updates(&self, project_id: i64, page: Option<PageQuery>) -> ActionResult<UpdatesPage> {
        let page = page.unwrap_or(PageQuery::new(1, UPDATES_PAGE_SIZE));
        self.send_query(&GET_UPDATES, format!("updates/{project_id}"), page.to_pairs())
            .await
    }

    pub async fn delete_update(&self, id: i64) -> ActionResult<MessageResponse> {
        self.send(&DELETE_UPDATE, format!("updates/{id}")).await
    }
}
