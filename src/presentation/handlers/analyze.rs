use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::AnalysisError;
use crate::domain::Document;
use crate::presentation::state::AppState;

use super::error::error_response;

pub const PDF_FILE_FIELD: &str = "pdf_file";

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<E, L>(
    State(state): State<AppState<E, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let uniform = state.settings.http.uniform_error_status;

    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(PDF_FILE_FIELD) {
                    continue;
                }
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(data) => {
                        upload = Some((filename, data.to_vec()));
                        break;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file: {}", e),
                            uniform,
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                    uniform,
                );
            }
        }
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Analyze request with no pdf_file field");
        return error_response(
            StatusCode::BAD_REQUEST,
            "No PDF file provided".to_string(),
            uniform,
        );
    };

    let document = Document::new(filename, data.len() as u64);

    tracing::debug!(
        document_id = %document.id.as_uuid(),
        filename = %document.filename,
        bytes = document.size_bytes,
        "Processing analyze upload"
    );

    match state.analysis_service.analyze(&data, &document).await {
        Ok(report) => {
            tracing::info!(
                document_id = %document.id.as_uuid(),
                risks_benefits = report.risks_benefits.len(),
                key_clauses = report.key_clauses.len(),
                "Document analysis successful"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => {
            tracing::error!(error = ?e, document_id = %document.id.as_uuid(), "Document analysis failed");
            error_response(analysis_error_status(&e), e.to_string(), uniform)
        }
    }
}

fn analysis_error_status(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
        AnalysisError::NotConfigured
        | AnalysisError::Extraction(_)
        | AnalysisError::Completion(_)
        | AnalysisError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
