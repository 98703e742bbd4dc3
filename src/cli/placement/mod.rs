//! Placement command - serves the campus placement predictor

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_placement_router;
use crate::cli::{build_socket_addr, shutdown_signal};
use crate::config::AppConfig;
use crate::infrastructure::logging;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_placement_state(&config).await?;
    let app = create_placement_router(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting placement server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Placement server shutdown complete");

    Ok(())
}
