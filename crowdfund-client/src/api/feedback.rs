//! Likes and saves

use shared::ActionResult;
use shared::response::{FlagResponse, LikesResponse, MessageResponse};

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

const PROJECT_NOT_FOUND: &str = "Project not found";

const LIKE_TAGS: &[Tag] = &[Tag::ProjectsLikes, Tag::ProjectsDidILikeThis];
const SAVE_TAGS: &[Tag] = &[Tag::ProjectsSaved, Tag::ProjectsDidISaveThis];

pub const LIKE_PROJECT: Endpoint =
    Endpoint::mutation("like_project", Verb::Post, LIKE_TAGS).authenticated();
pub const UNLIKE_PROJECT: Endpoint =
    Endpoint::mutation("unlike_project", Verb::Post, LIKE_TAGS).authenticated();
pub const SAVE_PROJECT: Endpoint =
    Endpoint::mutation("save_project", Verb::Post, SAVE_TAGS).authenticated();
pub const UNSAVE_PROJECT: Endpoint =
    Endpoint::mutation("unsave_project", Verb::Post, SAVE_TAGS).authenticated();

pub const GET_LIKES: Endpoint =
    Endpoint::read("get_likes", Tag::ProjectsLikes).not_found(PROJECT_NOT_FOUND);
pub const DID_I_LIKE: Endpoint = Endpoint::read("did_i_like", Tag::ProjectsDidILikeThis)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);
pub const DID_I_SAVE: Endpoint = Endpoint::read("did_i_save", Tag::ProjectsDidISaveThis)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

// ========== Feedback API ==========

impl CrowdfundClient {
    pub async fn like_project(&self, project_id: i64) -> ActionResult<MessageResponse> {
        self.send(&LIKE_PROJECT, format!("projects/like/{project_id}"))
            .await
    }

    pub async fn unlike_project(&self, project_id: i64) -> ActionResult<MessageResponse> {
        self.send(&UNLIKE_PROJECT, format!("projects/unlike/{project_id}"))
            .await
    }

    pub async fn save_project(&self, project_id: i64) -> ActionResult<MessageResponse> {
        self.send(&SAVE_PROJECT, format!("projects/save/{project_id}"))
            .await
    }

    pub async fn unsave_project(&self, project_id: i64) -> ActionResult<MessageResponse> {
        self.send(&UNSAVE_PROJECT, format!("projects/unsave/{project_id}"))
            .await
    }

    /// Like count of a project
    pub async fn get_likes(&self, project_id: i64) -> ActionResult<LikesResponse> {
        self.send(&GET_LIKES, format!("projects/like/{project_id}")).await
    }

    pub async fn did_i_like(&self, project_id: i64) -> ActionResult<FlagResponse> {
        self.send(&DID_I_LIKE, format!("projects/didILikeThis/{project_id}"))
            .await
    }

    pub async fn did_i_save(&self, project_id: i64) -> ActionResult<FlagResponse> {
        self.send(&DID_I_SAVE, format!("projects/didISaveThis/{project_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::Tag;
    use crate::http::Verb;
    use crate::testing::scripted_client;
    use serde_json::json;

    #[tokio::test]
    async fn test_like_fires_like_tags() {
        let (client, http, sink) = scripted_client();
        http.push_json(200, json!({"message": "Project got liked successfully"}));

        let result = client.like_project(3).await;

        assert!(result.status());
        let request = http.last_request();
        assert_eq!(request.verb, Verb::Post);
        assert_eq!(request.path, "projects/like/3");
        assert_eq!(sink.fired(), vec![Tag::ProjectsLikes, Tag::ProjectsDidILikeThis]);
    }

    #[tokio::test]
    async fn test_unsave_fires_save_tags() {
        let (client, http, sink) = scripted_client();
        http.push_json(200, json!({"message": "Project got unsaved successfully"}));
        client.unsave_project(3).await;
        assert_eq!(sink.fired(), vec![Tag::ProjectsSaved, Tag::ProjectsDidISaveThis]);
    }

    #[tokio::test]
    async fn test_did_i_like_reads_flag() {
        let (client, http, _) = scripted_client();
        http.push_json(200, json!({"message": "Did you like this project ?", "did_i": true}));
        let result = client.did_i_like(3).await;
        assert_eq!(result.payload().map(|f| f.value), Some(true));
    }

    #[tokio::test]
    async fn test_like_on_missing_project_is_toast_error() {
        let (client, http, sink) = scripted_client();
        http.push_json(404, json!({"error": "Project not found"}));
        let result = client.like_project(404).await;
        assert_eq!(result.error(), Some("Project not found"));
        assert!(sink.fired().is_empty());
    }
}
