//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::server::AppState;

/// Body of `GET /`.
pub const BANNER: &str = "API está funcionando! Acesse /users para ver a lista de usuários.";

/// Message returned when the user listing fails.
pub const LIST_USERS_ERROR: &str = "Erro interno do servidor ao buscar usuários.";

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    message: String,
}

impl ErrorResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

pub(crate) async fn root() -> &'static str {
    BANNER
}

pub(crate) async fn list_users(State(state): State<Arc<AppState>>) -> Response {
    match state.directory.list_users() {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch users");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, LIST_USERS_ERROR)
        },
    }
}
