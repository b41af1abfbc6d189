use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use crate::agent::ErrorResponse;

/// Which part of the request body was malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Messages,
    Config,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("malformed {field:?}: {detail}")]
    InvalidInput { field: InvalidField, detail: String },
    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ChatError {
    pub fn invalid_messages(detail: impl Into<String>) -> Self {
        ChatError::InvalidInput {
            field: InvalidField::Messages,
            detail: detail.into(),
        }
    }

    pub fn invalid_config(detail: impl Into<String>) -> Self {
        ChatError::InvalidInput {
            field: InvalidField::Config,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ChatError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ChatError::InvalidInput {
                field: InvalidField::Messages,
                ..
            } => "Messages invalides",
            ChatError::InvalidInput {
                field: InvalidField::Config,
                ..
            } => "Configuration invalide",
            ChatError::Internal(_) => "Erreur interne du serveur",
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match &self {
            ChatError::Internal(e) => error!("Error: {:#}", e),
            other => warn!("Rejected chat request: {}", other),
        }
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
