// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::label_service::LabelResolver;
use crate::domain::legacy::{LegacyEntry, LegacyRegistry};
use crate::infrastructure::config::load_settings;
use crate::infrastructure::openf1_repository::OpenF1Repository;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let settings = load_settings()?;

    // Legacy roster is fixed for the life of the process
    let registry = Arc::new(LegacyRegistry::new(
        settings.legacy.into_iter().map(LegacyEntry::from),
    ));

    // Create repository (infrastructure layer)
    let feed = Arc::new(OpenF1Repository::new(reqwest::Client::new(), &settings.feed));

    // Create services (application layer)
    let labels = LabelResolver::new(
        feed.clone(),
        Duration::from_millis(settings.feed.label_timeout_ms),
    );
    let dashboard_service = DashboardService::new(feed, registry.clone(), labels);

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = presentation::router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(
        "Dintel engine listening on {} ({} legacy entries, feed {})",
        addr,
        registry.len(),
        settings.feed.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
