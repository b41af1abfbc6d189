use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::agent::{generate_response, ChatHistory, ChatResponse, HistoryError};
use crate::config_manager::AgentConfig;
use crate::error::ChatError;
use crate::state::AppState;

/// `POST /api/chat`
///
/// An unparseable body is a server error; a missing or empty `messages` list,
/// or a malformed latest message, is a client error.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ChatError> {
    let request_id = Uuid::new_v4();
    let payload: Value =
        serde_json::from_slice(&body).context("Failed to parse chat request body")?;

    let (history, config) = parse_chat_request(payload, &state.config.default_agent)?;
    info!(
        %request_id,
        messages = history.len(),
        agent = %config.name,
        "Handling chat request"
    );

    let response = generate_response(&history, &config, &mut rand::thread_rng());
    debug!(%request_id, chars = response.chars().count(), "Generated reply");

    Ok(Json(ChatResponse { response }))
}

/// Validate the request shape. A missing or null `config` falls back to
/// `default_agent`.
pub fn parse_chat_request(
    mut payload: Value,
    default_agent: &AgentConfig,
) -> Result<(ChatHistory, AgentConfig), ChatError> {
    let messages = match payload.get_mut("messages").map(Value::take) {
        Some(Value::Array(messages)) => messages,
        _ => return Err(ChatError::invalid_messages("messages missing or not an array")),
    };

    let history = ChatHistory::try_from(messages).map_err(|e| match e {
        HistoryError::Empty => ChatError::invalid_messages("empty message list"),
        HistoryError::MalformedLatest(e) => {
            ChatError::invalid_messages(format!("latest message: {}", e))
        }
    })?;

    let config = match payload.get_mut("config").map(Value::take) {
        None | Some(Value::Null) => default_agent.clone(),
        Some(config) => {
            serde_json::from_value(config).map_err(|e| ChatError::invalid_config(e.to_string()))?
        }
    };

    Ok((history, config))
}
