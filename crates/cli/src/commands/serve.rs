use std::sync::Arc;

use anyhow::Result;
use catalogue_gateway::{CatalogueClient, ClientConfig};
use catalogue_http::{AppState, create_router};

pub(crate) async fn run(config: ClientConfig, port: u16, host: String) -> Result<()> {
    let client = CatalogueClient::new(config)?;
    if client.authenticate().await? {
        tracing::info!("Logged in to {}", client.base_url());
    }
    tracing::info!("Using catalogue backend at {}", client.base_url());

    let state = Arc::new(AppState::new(client));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
