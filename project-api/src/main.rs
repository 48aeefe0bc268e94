use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{adapters::outbound::memory::InMemoryProjectRepository, app_state::AppState};

mod adapters;
mod app_state;
mod config;
mod domain;
mod router;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "project_api=debug,tower_http=debug".into()),
        )
        .init();

    let settings = crate::config::read_config()?;

    // One store for the lifetime of the process, shared by all requests.
    let repository = Arc::new(InMemoryProjectRepository::new());
    let app_state = AppState::new(repository);
    let app = router::create(app_state, &settings.application);

    let address = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(
        "{} listening on {}",
        settings.application.name,
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
