use shared::ActionResult;
use shared::request::{DisputeInput, DisputeUpdate};
use shared::response::{DisputeEnvelope, MessageResponse};

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

const DISPUTE_TAGS: &[Tag] = &[Tag::DisputesTable];

pub const CREATE_DISPUTE: Endpoint =
    Endpoint::mutation("create_dispute", Verb::Post, DISPUTE_TAGS).authenticated();
pub const UPDATE_DISPUTE: Endpoint =
    Endpoint::mutation("update_dispute", Verb::Patch, DISPUTE_TAGS).authenticated();
pub const DELETE_DISPUTE: Endpoint =
    Endpoint::mutation("delete_dispute", Verb::Delete, DISPUTE_TAGS).authenticated();

// ========== Disputes API ==========

impl CrowdfundClient {
    /// Report a project or user identified by `resource_id`.
    pub async fn create_dispute(&self, resource_id: i64, dispute: &DisputeInput) -> ActionResult<DisputeEnvelope> {
        self.send_json(&CREATE_DISPUTE, format!("disputes/create/{resource_id}"), dispute)
            .await
    }

    /// Admin: resolve or reopen a dispute with a note
    pub async fn update_dispute(&self, dispute_id: i64, update: &DisputeUpdate) -> ActionResult<DisputeEnvelope> {
        self.send_json(&UPDATE_DISPUTE, format!("disputes/{dispute_id}"), update)
            .await
    }

    pub async fn delete_dispute(&self, dispute_id: i64) -> ActionResult<MessageResponse> {
        self.send(&DELETE_DISPUTE, format!("disputes/{dispute_id}")).await
    }
}
