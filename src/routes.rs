use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::config_manager::AgentConfig;
use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        // Chat
        .route("/api/chat", post(handlers::chat))

        // Health check
        .route("/api/health", get(health_check))

        // Initial configuration for the UI
        .route("/api/agent-config", get(get_agent_config));

    // Static single-page UI
    let static_dir = state.config.system_config.static_path();
    if static_dir.is_dir() {
        info!("Serving UI from {}", static_dir.display());
        let index = static_dir.join("index.html");
        router.fallback_service(ServeDir::new(&static_dir).not_found_service(ServeFile::new(index)))
    } else {
        warn!("Static directory {} not found, UI disabled", static_dir.display());
        router
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

async fn get_agent_config(State(state): State<AppState>) -> Json<AgentConfig> {
    Json(state.config.default_agent.clone())
}
