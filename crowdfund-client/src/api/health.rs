use shared::ActionResult;

use crate::client::CrowdfundClient;
use crate::endpoint::Endpoint;

pub const HEALTH_CHECK: Endpoint = Endpoint::get("health_check");

impl CrowdfundClient {
    /// Liveness probe; the backend answers with plain text.
    pub async fn health_check(&self) -> ActionResult<String> {
        let request = self.request(&HEALTH_CHECK, "healthCheck");
        self.call_raw(&HEALTH_CHECK, request)
            .await
            .map(|response| response.text())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::scripted_client;

    #[tokio::test]
    async fn test_health_text_body() {
        let (client, http, _) = scripted_client();
        http.push_text(200, "status: available\nenvironment: development");

        let result = client.health_check().await;

        assert_eq!(
            result.payload().map(String::as_str),
            Some("status: available\nenvironment: development")
        );
        assert!(http.last_request().bearer.is_none());
    }

    #[tokio::test]
    async fn test_health_unreachable() {
        let (client, http, _) = scripted_client();
        http.push_error("connection refused");
        assert!(!client.health_check().await.status());
    }
}
