use shared::ActionResult;
use shared::request::{BackProjectRequest, BackingStatusUpdate, PaymentIntentRequest, RefundRequest};
use shared::response::{
    BackersCount, BackingEnvelope, FlagResponse, MessageResponse, PaymentIntent, RewardsEnvelope,
};

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

const PROJECT_NOT_FOUND: &str = "Project not found";

/// Tags touched when a backing's payment changes state
const BACKING_STATE_TAGS: &[Tag] = &[
    Tag::ProjectsTable,
    Tag::BackingsTable,
    Tag::DidIBack,
    Tag::StatsBackingsRefunds,
];

pub const CREATE_PAYMENT_INTENT: Endpoint =
    Endpoint::mutation("create_payment_intent", Verb::Post, &[]).authenticated();

pub const BACK_PROJECT: Endpoint = Endpoint::mutation(
    "back_project",
    Verb::Post,
    &[
        Tag::Project,
        Tag::Projects,
        Tag::DidIBack,
        Tag::ProjectsTable,
        Tag::BackingsTable,
        Tag::ProjectsCreator,
        Tag::ProjectBackers,
        Tag::StatsGeneral,
        Tag::StatsBackingsRefunds,
        Tag::StatsOverview,
        Tag::StatsTopProjects,
        Tag::StatsCreatorsBackers,
    ],
)
.authenticated();

pub const BACKERS_COUNT: Endpoint = Endpoint::read("backers_count", Tag::ProjectBackers)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const DID_I_BACK: Endpoint = Endpoint::read("did_i_back", Tag::DidIBack)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const REFUND_BACKING: Endpoint = Endpoint::mutation(
    "refund_backing",
    Verb::Post,
    &[
        Tag::Project,
        Tag::Projects,
        Tag::ProjectsTable,
        Tag::BackingsTable,
        Tag::DidIBack,
        Tag::ProjectsCreator,
        Tag::ProjectBackers,
        Tag::StatsBackingsRefunds,
    ],
)
.authenticated();

pub const DELETE_BACKING: Endpoint =
    Endpoint::mutation("delete_backing", Verb::Delete, BACKING_STATE_TAGS).authenticated();

pub const UPDATE_BACKING: Endpoint =
    Endpoint::mutation("update_backing", Verb::Patch, BACKING_STATE_TAGS).authenticated();

pub const REWARDS_BY_BACKING: Endpoint =
    Endpoint::cached("rewards_by_backing", Tag::BackingRewards).authenticated();

// ========== Backing API ==========

impl CrowdfundClient {
    /// Start a card payment; the client secret completes it in the browser.
    pub async fn create_payment_intent(&self, request: &PaymentIntentRequest) -> ActionResult<PaymentIntent> {
        let path = format!("backing/backIntent/{}", request.project_id);
        self.send_json(&CREATE_PAYMENT_INTENT, path, request).await
    }

    /// Record a completed payment as a backing.
    pub async fn back_project(&self, project_id: i64, request: &BackProjectRequest) -> ActionResult<BackingEnvelope> {
        self.send_json(&BACK_PROJECT, format!("backing/backProject/{project_id}"), request)
            .await
    }

    pub async fn backers_count(&self, project_id: i64) -> ActionResult<BackersCount> {
        self.send(&BACKERS_COUNT, format!("backing/projectBackers/{project_id}"))
            .await
    }

    pub async fn did_i_back(&self, project_id: i64) -> ActionResult<FlagResponse> {
        self.send(&DID_I_BACK, format!("backing/didIbackIt/{project_id}"))
            .await
    }

    pub async fn refund_backing(&self, project_id: i64, request: &RefundRequest) -> ActionResult<MessageResponse> {
        self.send_json(&REFUND_BACKING, format!("backing/refund/{project_id}"), request)
            .await
    }

    /// Admin: remove a backing record
    pub async fn delete_backing(&self, id: i64) -> ActionResult<MessageResponse> {
        self.send(&DELETE_BACKING, format!("backing/{id}")).await
    }

    /// Admin: move a payment to a new status
    pub async fn update_backing(&self, payment_id: i64, update: &BackingStatusUpdate) -> ActionResult<BackingEnvelope> {
        self.send_json(&UPDATE_BACKING, format!("backing/{payment_id}"), update)
            .await
    }

    /// Reward tiers chosen with a backing; cached until `backing-rewards`
    /// is invalidated.
    pub async fn rewards_by_backing(&self, backing_id: i64) -> ActionResult<RewardsEnvelope> {
        self.send(&REWARDS_BY_BACKING, format!("backing/rewards/{backing_id}"))
            .await
    }
}
