use shared::ActionResult;
use shared::models::ProjectRow;
use shared::request::{PageQuery, ProjectCreate, ProjectPatch, ProjectQuery};
use shared::response::{
    MessageResponse, ProjectEnvelope, ProjectList, ReviewEnvelope, TablePage, UploadResponse,
};

use super::invalid_date;
use crate::cache::Tag;
use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;
use crate::http::Verb;
use crate::normalize::decode;

const PROJECT_NOT_FOUND: &str = "Project not found";
const USER_NOT_FOUND: &str = "User not found";

pub const CREATE_PROJECT: Endpoint = Endpoint::mutation(
    "create_project",
    Verb::Post,
    &[
        Tag::Projects,
        Tag::ProjectsTable,
        Tag::ProjectsReviewer,
        Tag::ProjectsFlagged,
        Tag::ProjectsCreator,
        Tag::ProjectsUser,
        Tag::StatsGeneral,
        Tag::StatsOverview,
        Tag::StatsTopProjects,
        Tag::StatsCategories,
        Tag::StatsCreatorsBackers,
    ],
)
.authenticated();

pub const GET_PROJECT: Endpoint = Endpoint::read("get_project", Tag::Project)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const GET_PROJECT_PUBLIC: Endpoint = Endpoint::read("get_project_public", Tag::Project)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const UPDATE_PROJECT: Endpoint = Endpoint::mutation(
    "update_project",
    Verb::Patch,
    &[
        Tag::Project,
        Tag::Projects,
        Tag::ProjectsTable,
        Tag::ProjectsCreator,
        Tag::ProjectsBacker,
        Tag::StatsGeneral,
        Tag::StatsOverview,
        Tag::StatsTopProjects,
    ],
)
.authenticated();

pub const DELETE_PROJECT: Endpoint = Endpoint::mutation(
    "delete_project",
    Verb::Delete,
    &[
        Tag::Projects,
        Tag::ProjectsTable,
        Tag::ProjectsCreator,
        Tag::ProjectsBacker,
        Tag::StatsGeneral,
        Tag::StatsOverview,
        Tag::StatsTopProjects,
        Tag::StatsCategories,
        Tag::StatsCreatorsBackers,
    ],
)
.authenticated();

pub const UPLOAD_IMAGE: Endpoint =
    Endpoint::mutation("upload_image", Verb::Post, &[Tag::ProjectsCreator]).authenticated();

pub const LIST_PROJECTS: Endpoint = Endpoint::read("list_projects", Tag::Projects).authenticated();

pub const MY_PROJECTS: Endpoint = Endpoint::read("my_projects", Tag::ProjectsCreator)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const PROJECTS_BY_CREATOR: Endpoint = Endpoint::read("projects_by_creator", Tag::ProjectsUser)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const PROJECTS_BY_BACKER: Endpoint = Endpoint::read("projects_by_backer", Tag::ProjectsBacker)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const SAVED_PROJECTS: Endpoint = Endpoint::read("saved_projects", Tag::ProjectsSaved)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const GET_REVIEW: Endpoint = Endpoint::read("get_review", Tag::ProjectsReview)
    .authenticated()
    .not_found(PROJECT_NOT_FOUND);

pub const PROJECTS_FOR_REVIEWER: Endpoint =
    Endpoint::read("projects_for_reviewer", Tag::ProjectsReviewer)
        .authenticated()
        .not_found(USER_NOT_FOUND);

pub const FLAGGED_FOR_REVIEWER: Endpoint =
    Endpoint::read("flagged_for_reviewer", Tag::ProjectsFlagged)
        .authenticated()
        .not_found(USER_NOT_FOUND);

// ========== Projects API ==========

impl CrowdfundClient {
    /// Create a project. The deadline is normalized to RFC 3339 in the
    /// configured offset; an unreadable deadline fails without a request.
    pub async fn create_project(&self, form: &ProjectCreate) -> ActionResult<ProjectEnvelope> {
        let form = match form.normalized(self.offset()) {
            Ok(form) => form,
            Err(err) => return invalid_date("deadline", err),
        };
        self.send_json(&CREATE_PROJECT, "projects/create", &form).await
    }

    /// Project as seen by its owner (or staff)
    pub async fn get_project(&self, id: i64) -> ActionResult<ProjectEnvelope> {
        self.send(&GET_PROJECT, format!("projects/{id}")).await
    }

    /// Project as shown on the public page
    pub async fn get_project_public(&self, id: i64) -> ActionResult<ProjectEnvelope> {
        self.send(&GET_PROJECT_PUBLIC, format!("projects/discover/{id}"))
            .await
    }

    /// Apply one editor step or a status change.
    pub async fn update_project(&self, id: i64, patch: &ProjectPatch) -> ActionResult<ProjectEnvelope> {
        let patch = match patch.normalized(self.offset()) {
            Ok(patch) => patch,
            Err(err) => return invalid_date(patch.date_field().unwrap_or("date"), err),
        };
        self.send_json(&UPDATE_PROJECT, format!("projects/{id}"), &patch)
            .await
    }

    pub async fn delete_project(&self, id: i64) -> ActionResult<MessageResponse> {
        self.send(&DELETE_PROJECT, format!("projects/{id}")).await
    }

    /// Upload a cover image as a multipart `file` field.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ActionResult<UploadResponse> {
        let request = self
            .request(&UPLOAD_IMAGE, "projects/image/upload")
            .with_file("file", file_name, bytes);
        decode(self.call(&UPLOAD_IMAGE, request).await)
    }

    /// Discover-page listing
    pub async fn list_projects(&self, query: &ProjectQuery) -> ActionResult<ProjectList> {
        self.send_query(&LIST_PROJECTS, "projects", query.to_pairs())
            .await
    }

    /// Projects created by the session user
    pub async fn my_projects(&self) -> ActionResult<ProjectList> {
        self.send(&MY_PROJECTS, "projects/me").await
    }

    pub async fn projects_by_creator(&self, user_id: i64) -> ActionResult<ProjectList> {
        self.send(&PROJECTS_BY_CREATOR, format!("projects/creator/{user_id}"))
            .await
    }

    pub async fn projects_by_backer(&self, user_id: i64) -> ActionResult<ProjectList> {
        self.send(&PROJECTS_BY_BACKER, format!("projects/backer/{user_id}"))
            .await
    }

    pub async fn saved_projects(&self) -> ActionResult<ProjectList> {
        self.send(&SAVED_PROJECTS, "projects/saved").await
    }

    /// Reviewer decision and expert reviews of a project
    pub async fn get_review(&self, project_id: i64) -> ActionResult<ReviewEnvelope> {
        self.send(&GET_REVIEW, format!("projects/review/{project_id}"))
            .await
    }

    pub async fn projects_for_reviewer(&self, page: PageQuery) -> ActionResult<TablePage<ProjectRow>> {
        self.send_query(&PROJECTS_FOR_REVIEWER, "projects/reviewer", page.to_pairs())
            .await
    }

    pub async fn flagged_for_reviewer(&self, page: PageQuery) -> ActionResult<TablePage<ProjectRow>> {
        self.send_query(&FLAGGED_FOR_REVIEWER, "projects/flagged/reviewer", page.to_pairs())
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::Tag;
    use crate::http::{RequestBody, Verb};
    use crate::testing::scripted_client;
    use serde_json::json;
    use shared::ActionError;
    use shared::request::{PageQuery, ProjectCreate, ProjectPatch, ProjectQuery, SORT_MOST_FUNDED};

    fn project_form(deadline: &str) -> ProjectCreate {
        ProjectCreate {
            title: "Solar kiosk".into(),
            description: "Phone charging for the market".into(),
            categories: vec!["Energy".into()],
            funding_goal: 2000.0,
            deadline: deadline.into(),
        }
    }

    #[tokio::test]
    async fn test_create_project_normalizes_deadline() {
        let (client, http, sink) = scripted_client();
        http.push_json(201, json!({"message": "Project created successfully", "project": {"project_id": 5, "title": "Solar kiosk"}}));

        let result = client.create_project(&project_form("2027-01-15T09:00")).await;

        assert_eq!(result.payload().map(|e| e.project.project_id), Some(5));
        assert_eq!(
            http.last_request().json().map(|b| b["deadline"].clone()),
            Some(json!("2027-01-15T09:00:00+00:00"))
        );
        assert!(sink.fired().contains(&Tag::StatsCategories));
        assert!(sink.fired().contains(&Tag::ProjectsReviewer));
    }

    #[tokio::test]
    async fn test_create_project_rejects_bad_deadline_without_request() {
        let (client, http, sink) = scripted_client();
        let result = client.create_project(&project_form("next tuesday")).await;

        match result.failure() {
            Some(ActionError::FieldValidation { fields, message }) => {
                assert!(fields.get("deadline").is_some());
                assert!(message.starts_with('*'));
            }
            other => panic!("unexpected failure: {other:?}"),
        }
        assert!(http.requests().is_empty());
        assert!(sink.fired().is_empty());
    }

    #[tokio::test]
    async fn test_project_field_errors_collapsed() {
        let (client, http, _) = scripted_client();
        http.push_json(
            422,
            json!({"error": {"title": "Title must be provided", "deadline": "Deadline must be provided", "funding_goal": "Funding goal must be a positive number"}}),
        );
        let result = client.create_project(&project_form("2027-01-15T09:00")).await;
        assert_eq!(
            result.error(),
            Some("*Title must be provided\n*Deadline must be provided\n*Funding goal must be a positive number")
        );
    }

    #[tokio::test]
    async fn test_get_project_not_found() {
        let (client, http, _) = scripted_client();
        http.push_json(404, json!({"error": "Project not found"}));
        let result = client.get_project_public(41).await;
        assert!(result.failure().is_some_and(ActionError::is_not_found));
        assert_eq!(http.last_request().path, "projects/discover/41");
    }

    #[tokio::test]
    async fn test_update_project_status() {
        let (client, http, sink) = scripted_client();
        http.push_json(200, json!({"message": "Project updated successfully", "project": {"project_id": 5, "title": "Solar kiosk", "status": "pending"}}));

        let result = client
            .update_project(
                5,
                &ProjectPatch::Status {
                    status: "pending".into(),
                    launched_at: None,
                },
            )
            .await;

        assert!(result.status());
        let request = http.last_request();
        assert_eq!(request.verb, Verb::Patch);
        assert_eq!(request.json(), Some(&json!({"status": "pending"})));
        assert_eq!(sink.fired().len(), 8);
    }

    #[tokio::test]
    async fn test_list_projects_query() {
        let (client, http, _) = scripted_client();
        http.push_json(200, json!({"message": "Projects returned successfully", "projects": [], "metadata": {"current_page": 1, "page_size": 10, "first_page": 1, "last_page": 1, "total_records": 0}}));

        let result = client
            .list_projects(&ProjectQuery {
                search: "solar".into(),
                categories: vec!["Energy".into(), "Tech".into()],
                sort: SORT_MOST_FUNDED.into(),
                ..ProjectQuery::default()
            })
            .await;

        assert!(result.payload().is_some_and(|list| list.projects.is_empty()));
        assert_eq!(
            http.last_request().cache_key(),
            "projects?title=solar&categories=Energy,Tech&sort=-(current_funding*100)/funding_goal&page=1&page_size=10"
        );
    }

    #[tokio::test]
    async fn test_upload_image_is_multipart() {
        let (client, http, sink) = scripted_client();
        http.push_json(200, json!({"message": "File uploaded successfully", "url": "https://cdn.example.com/cover.jpg"}));

        let result = client.upload_image("cover.jpg", vec![0xff, 0xd8]).await;

        assert_eq!(
            result.payload().map(|u| u.url.as_str()),
            Some("https://cdn.example.com/cover.jpg")
        );
        match http.last_request().body {
            RequestBody::File { field, content_type, .. } => {
                assert_eq!(field, "file");
                assert_eq!(content_type, "image/jpeg");
            }
            other => panic!("unexpected body: {other:?}"),
        }
        assert_eq!(sink.fired(), vec![Tag::ProjectsCreator]);
    }

    #[tokio::test]
    async fn test_reviewer_table_paging() {
        let (client, http, _) = scripted_client();
        http.push_json(200, json!({"message": "projects returned successfully", "table": [{"project_id": 2, "title": "Kiosk", "status": "pending"}], "metadata": {"current_page": 2, "page_size": 5, "first_page": 1, "last_page": 3, "total_records": 12}}));

        let result = client.flagged_for_reviewer(PageQuery::new(2, 5)).await;

        let page = result.payload().expect("success");
        assert_eq!(page.table.len(), 1);
        assert!(page.metadata.has_next());
        assert_eq!(
            http.last_request().cache_key(),
            "projects/flagged/reviewer?page=2&page_size=5"
        );
    }
}
