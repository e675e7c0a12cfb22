use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionEngine, DocumentParser, StagingStore};
use crate::domain::Category;
use crate::presentation::state::AppState;

use super::error_status;

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    /// Caller-supplied category override; inference still runs and its
    /// result is returned in the document metadata.
    pub category: Option<Category>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<P, C, S>(
    State(state): State<AppState<P, C, S>>,
    Query(params): Query<ExtractParams>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    P: DocumentParser + 'static,
    C: CompletionEngine + 'static,
    S: StagingStore + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Extract request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    tracing::debug!(filename = %filename, content_type = %content_type, "Processing file upload");

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state
        .extraction_service
        .extract(&data, &filename, &content_type, params.category)
        .await
    {
        Ok(response) => {
            tracing::info!(
                category = %response.document_metadata.category,
                filename = %filename,
                "Extraction successful"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, filename = %filename, "Extraction failed");
            (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
