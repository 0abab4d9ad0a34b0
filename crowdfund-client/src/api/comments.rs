use shared::ActionResult;
use shared::request::CommentInput;
use shared::response::{CommentEnvelope, CommentsEnvelope};

use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;

pub const GET_COMMENTS: Endpoint = Endpoint::cached("get_comments", Tag::Comments);
pub const CREATE_COMMENT: Endpoint =
    Endpoint::mutation("create_comment", Verb::Post, &[Tag::Comments]).authenticated();

// ========== Comments API ==========

impl CrowdfundClient {
    /// Comment thread of a project, flattened; see `Comment::depth`.
    pub async fn get_comments(&self, project_id: i64) -> ActionResult<CommentsEnvelope> {
        self.send(&GET_COMMENTS, format!("comments/{project_id}")).await
    }

    /// Post a comment, or a reply when `parent_comment_id` is set.
    pub async fn create_comment(&self, project_id: i64, comment: &CommentInput) -> ActionResult<CommentEnvelope> {
        self.send_json(&CREATE_COMMENT, format!("comments/create/{project_id}"), comment)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::Tag;
    use crate::testing::scripted_client;
    use serde_json::json;
    use shared::request::CommentInput;

    #[tokio::test]
    async fn test_reply_carries_parent() {
        let (client, http, sink) = scripted_client();
        http.push_json(201, json!({"message": "Comment created successfully", "comment": {"id": 12, "content": "agreed", "path": "4.12"}}));

        let result = client
            .create_comment(
                3,
                &CommentInput {
                    content: "agreed".into(),
                    parent_comment_id: Some(4),
                },
            )
            .await;

        assert_eq!(result.payload().map(|c| c.comment.depth()), Some(1));
        assert_eq!(
            http.last_request().json(),
            Some(&json!({"content": "agreed", "parent_comment_id": 4}))
        );
        assert_eq!(sink.fired(), vec![Tag::Comments]);
    }

    #[tokio::test]
    async fn test_top_level_comment_sends_null_parent() {
        let (client, http, _) = scripted_client();
        http.push_json(201, json!({"message": "Comment created successfully", "comment": {"id": 13, "content": "hi"}}));

        client
            .create_comment(
                3,
                &CommentInput {
                    content: "hi".into(),
                    parent_comment_id: None,
                },
            )
            .await;

        assert_eq!(
            http.last_request().json(),
            Some(&json!({"content": "hi", "parent_comment_id": null}))
        );
    }

    #[tokio::test]
    async fn test_empty_comment_field_error() {
        let (client, http, sink) = scripted_client();
        http.push_json(422, json!({"error": {"content": "must be provided"}}));

        let result = client
            .create_comment(
                3,
                &CommentInput {
                    content: String::new(),
                    parent_comment_id: None,
                },
            )
            .await;

        assert_eq!(result.error(), Some("*must be provided"));
        assert!(sink.fired().is_empty());
    }
}
