//! HTTP server initialization and runtime setup.
//!
//! Handles burner-list loading, state construction, and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::config::Config;
use crate::domain::burner::BurnerDomainList;
use crate::infrastructure::burner_list::StaticBurnerList;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Burner-domain lookup (configured file, falling back to the bundled snapshot)
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed or bound
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let burner_domains = load_burner_domains(&config);

    let state = AppState::new(burner_domains);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the burner-domain lookup from the configured file, or the bundled
/// snapshot when no file is configured or the file cannot be loaded.
fn load_burner_domains(config: &Config) -> Arc<dyn BurnerDomainList> {
    match &config.burner_list_path {
        Some(path) => match StaticBurnerList::from_file(path) {
            Ok(list) => {
                tracing::info!("Loaded {} burner domains from {}", list.len(), path);
                Arc::new(list)
            }
            Err(e) => {
                tracing::warn!("Failed to load burner list from {path}: {e}. Using bundled snapshot.");
                Arc::new(StaticBurnerList::bundled())
            }
        },
        None => {
            let list = StaticBurnerList::bundled();
            tracing::info!("Using bundled burner domain snapshot ({} domains)", list.len());
            Arc::new(list)
        }
    }
}

/// Resolves when the process receives SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
