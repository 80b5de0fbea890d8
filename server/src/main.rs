//! Admin Console Server - Main Entry Point

use anyhow::Result;
use tracing::info;

use console_server::{api, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Admin Console Server"
    );

    // Role grants are fixed for the lifetime of the process
    let roles = config.load_role_map()?;
    info!(
        roles = roles.len(),
        source = config
            .role_map_path
            .as_ref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "Role map loaded"
    );

    // Build application state
    let state = api::AppState::new(config.clone(), roles);

    // Periodically drop idle sessions
    let sessions = state.sessions.clone();
    let sweep_every = config.session_ttl().max(std::time::Duration::from_secs(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_every);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired();
            if purged > 0 {
                tracing::debug!(purged, "Expired sessions purged");
            }
        }
    });

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
