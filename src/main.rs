mod agent;
mod config_manager;
mod error;
mod handlers;
mod routes;
mod state;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("agent_chat=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration - first candidate that parses wins
    let config = Config::discover(&Config::candidate_paths());

    let addr = config.system_config.socket_addr();
    let cors_permissive = config.system_config.cors_permissive;
    info!(
        "Default agent: {} ({})",
        config.default_agent.name, config.default_agent.expertise
    );

    // Initialize app state
    let app_state = AppState::new(config);

    // Build application
    let mut app = routes::create_routes(&app_state)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);
    if cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    // Start server
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
