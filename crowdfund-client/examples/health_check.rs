// crowdfund-client/examples/health_check.rs
// Probe the backend and optionally show one public project
//
// API_URL=http://localhost:4000/v1 cargo run --example health_check -- 7

use crowdfund_client::consumer::present_page;
use crowdfund_client::{ClientConfig, CrowdfundClient, Presentation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crowdfund_client=info".into()),
        )
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Using backend at {}", config.base_url);
    let client = CrowdfundClient::new(config)?;

    match client.health_check().await.into_page() {
        Ok(body) => println!("{body}"),
        Err(e) => {
            tracing::error!("Backend unreachable: {}", e);
            return Err(e.into());
        }
    }

    let Some(id) = std::env::args().nth(1) else {
        return Ok(());
    };
    let id: i64 = id.parse()?;

    let result = client.get_project_public(id).await;
    match present_page(&result) {
        None => {
            if let Some(envelope) = result.payload() {
                println!("{:#?}", envelope.project);
            }
        }
        Some(Presentation::NotFound) => println!("Project {id} not found"),
        Some(other) => println!("{other:?}"),
    }

    Ok(())
}
