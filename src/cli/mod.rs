//! CLI module
//!
//! One subcommand per application:
//! - `car-price`: the used car price estimator
//! - `placement`: the campus placement predictor

pub mod car_price;
pub mod placement;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::info;

use crate::config::AppConfig;

/// Model Serve - small form-driven prediction services
#[derive(Parser)]
#[command(name = "model-serve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the car price estimator
    CarPrice,

    /// Run the campus placement predictor
    Placement,
}

pub(crate) fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
