use shared::request::{Assessment, ExpertCreate};
use shared::response::{AssessmentEnvelope, ExpertEnvelope};
use shared::ActionResult;

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

pub const CREATE_EXPERT: Endpoint =
    Endpoint::mutation("create_expert", Verb::Post, &[Tag::UsersTable]).authenticated();
pub const ASSESS_PROJECT: Endpoint = Endpoint::mutation(
    "assess_project",
    Verb::Post,
    &[
        Tag::Project,
        Tag::Projects,
        Tag::ProjectsTable,
        Tag::ProjectsCreator,
        Tag::ProjectsBacker,
    ],
)
.authenticated();

// ========== Experts API ==========

impl CrowdfundClient {
    /// Admin: create an expert account. `expertise_level` is a percentage
    /// and goes over the wire as a ratio.
    pub async fn create_expert(&self, form: &ExpertCreate) -> ActionResult<ExpertEnvelope> {
        self.send_json(&CREATE_EXPERT, "experts/create", form).await
    }

    /// Submit an expert's vote (percentages) on a project.
    pub async fn assess_project(&self, project_id: i64, form: &Assessment) -> ActionResult<AssessmentEnvelope> {
        self.send_json(&ASSESS_PROJECT, format!("experts/assess/{project_id}"), form)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::Tag;
    use crate::testing::scripted_client;
    use serde_json::json;
    use shared::models::Vote;
    use shared::request::{Assessment, ExpertCreate};

    fn expert_form() -> ExpertCreate {
        ExpertCreate {
            username: "expert1".into(),
            email: "e@example.com".into(),
            password: "Secret123!".into(),
            role: "expert".into(),
            expertise_fields: vec!["Energy".into()],
            expertise_level: Some(45.0),
            qualification: "PhD".into(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_create_expert_sends_ratio_and_collapses_field_error() {
        let (client, http, sink) = scripted_client();
        http.push_json(422, json!({"error": {"expertise_level": "must be between 0 and 1"}}));

        let result = client.create_expert(&expert_form()).await;

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": false, "error": "*must be between 0 and 1"})
        );
        assert_eq!(
            http.last_request().json().map(|b| b["expertise_level"].clone()),
            Some(json!(0.45))
        );
        assert!(sink.fired().is_empty());
    }

    #[tokio::test]
    async fn test_create_expert_success_invalidates_users_table() {
        let (client, http, sink) = scripted_client();
        http.push_json(201, json!({"message": "Expert created successfully", "expert": {"expert_id": 2, "expertise_level": 0.45, "user_id": 9}}));

        let result = client.create_expert(&expert_form()).await;
        assert_eq!(result.payload().map(|e| e.expert.user_id), Some(9));
        assert_eq!(sink.fired(), vec![Tag::UsersTable]);
    }

    #[tokio::test]
    async fn test_assess_project_sends_ratios() {
        let (client, http, sink) = scripted_client();
        http.push_json(201, json!({"message": "Project assessed successfully", "review": {"id": 1, "vote": {"highly_not_recommended": 0.0, "not_recommended": 0.25, "recommended": 0.75, "highly_recommended": 0.0}, "project_id": 12}}));

        let result = client
            .assess_project(
                12,
                &Assessment {
                    vote: Vote {
                        highly_not_recommended: 0.0,
                        not_recommended: 25.0,
                        recommended: 75.0,
                        highly_recommended: 0.0,
                    },
                    comment: "promising".into(),
                },
            )
            .await;

        assert!(result.status());
        let request = http.last_request();
        assert_eq!(request.path, "experts/assess/12");
        assert_eq!(request.json().map(|b| b["vote"]["recommended"].clone()), Some(json!(0.75)));
        assert_eq!(sink.fired().len(), 5);
        assert!(sink.fired().contains(&Tag::ProjectsBacker));
    }
}
