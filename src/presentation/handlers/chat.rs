use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::ChatError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub document_text: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler<E, L>(
    State(state): State<AppState<E, L>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let uniform = state.settings.http.uniform_error_status;

    // A missing body or missing field is a client error; it must yield the
    // JSON error shape, not axum's plain-text rejection.
    let Ok(Json(request)) = payload else {
        tracing::warn!("Chat request with missing or malformed body");
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing question or document text".to_string(),
            uniform,
        );
    };

    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing chat question");

    match state
        .chat_service
        .ask(&request.question, &request.document_text)
        .await
    {
        Ok(answer) => {
            tracing::info!("Chat completion successful");
            (StatusCode::OK, Json(ChatResponse { answer })).into_response()
        }
        Err(e) => {
            tracing::error!(error = ?e, "Chat completion failed");
            error_response(chat_error_status(&e), e.to_string(), uniform)
        }
    }
}

fn chat_error_status(error: &ChatError) -> StatusCode {
    match error {
        ChatError::NotConfigured | ChatError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
