use shared::ActionResult;
use shared::request::{RewardInput, RewardsMode, RewardsRequest};
use shared::response::RewardsEnvelope;

use super::invalid_date;
use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

const REWARD_TAGS: &[Tag] = &[
    Tag::Project,
    Tag::Projects,
    Tag::ProjectsTable,
    Tag::ProjectsCreator,
    Tag::Rewards,
];

pub const CREATE_REWARDS: Endpoint =
    Endpoint::mutation("create_rewards", Verb::Post, REWARD_TAGS).authenticated();
pub const UPDATE_REWARDS: Endpoint =
    Endpoint::mutation("update_rewards", Verb::Put, REWARD_TAGS).authenticated();
pub const GET_REWARDS: Endpoint = Endpoint::cached("get_rewards", Tag::Rewards);

// ========== Rewards API ==========

impl CrowdfundClient {
    /// Create or replace a project's reward tiers. Amounts go over the wire
    /// in cents and delivery dates are normalized; an unreadable date fails
    /// without a request.
    pub async fn save_rewards(
        &self,
        project_id: i64,
        rewards: &[RewardInput],
        mode: RewardsMode,
    ) -> ActionResult<RewardsEnvelope> {
        let offset = self.offset();
        let rewards = match rewards
            .iter()
            .map(|reward| reward.to_wire(offset))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(rewards) => rewards,
            Err(err) => return invalid_date("estimated_delivery", err),
        };
        let (endpoint, path) = match mode {
            RewardsMode::Create => (&CREATE_REWARDS, format!("rewards/create/{project_id}")),
            RewardsMode::Update => (&UPDATE_REWARDS, format!("rewards/update/{project_id}")),
        };
        self.send_json(endpoint, path, &RewardsRequest { rewards })
            .await
    }

    /// Reward tiers of a project; cached until `rewards` is invalidated.
    pub async fn get_rewards(&self, project_id: i64) -> ActionResult<RewardsEnvelope> {
        self.send(&GET_REWARDS, format!("rewards/{project_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::Tag;
    use crate::http::Verb;
    use crate::testing::scripted_client;
    use serde_json::json;
    use shared::ActionError;
    use shared::request::{RewardInput, RewardsMode};

    fn reward(delivery: &str) -> RewardInput {
        RewardInput {
            id: None,
            title: "Sticker pack".into(),
            description: "Three stickers".into(),
            amount: 12.5,
            estimated_delivery: delivery.into(),
            image_url: String::new(),
            includes: vec!["stickers".into()],
            is_available: true,
        }
    }

    #[tokio::test]
    async fn test_update_rewards_uses_put_and_cents() {
        let (client, http, sink) = scripted_client();
        http.push_json(200, json!({"message": "Rewards updated successfully", "rewards": []}));

        let result = client
            .save_rewards(4, &[reward("2027-01-15T09:00")], RewardsMode::Update)
            .await;

        assert!(result.status());
        let request = http.last_request();
        assert_eq!(request.verb, Verb::Put);
        assert_eq!(request.path, "rewards/update/4");
        let body = request.json().expect("json body");
        assert_eq!(body["rewards"][0]["amount"], json!(1250.0));
        assert_eq!(body["rewards"][0]["estimated_delivery"], json!("2027-01-15T09:00:00+00:00"));
        assert!(sink.fired().contains(&Tag::Rewards));
    }

    #[tokio::test]
    async fn test_bad_delivery_date_is_field_error() {
        let (client, http, _) = scripted_client();
        let result = client
            .save_rewards(4, &[reward("soon")], RewardsMode::Create)
            .await;
        assert!(matches!(result.failure(), Some(ActionError::FieldValidation { .. })));
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_saving_rewards_refreshes_cached_rewards() {
        let (client, http, _) = scripted_client();
        http.push_json(200, json!({"message": "Rewards returned successfully", "rewards": []}));
        http.push_json(201, json!({"message": "Rewards created successfully", "rewards": []}));
        http.push_json(200, json!({"message": "Rewards returned successfully", "rewards": [{"id": 1, "title": "Sticker pack", "amount": 1250}]}));

        let before = client.get_rewards(4).await;
        let cached = client.get_rewards(4).await;
        assert_eq!(http.requests().len(), 1);
        assert_eq!(before.payload().map(|r| r.rewards.len()), Some(0));
        assert_eq!(cached.payload().map(|r| r.rewards.len()), Some(0));

        client
            .save_rewards(4, &[reward("2027-01-15T09:00")], RewardsMode::Create)
            .await;
        let after = client.get_rewards(4).await;
        assert_eq!(http.requests().len(), 3);
        assert_eq!(after.payload().map(|r| r.rewards.len()), Some(1));
    }
}
