use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CompletionEngine, DocumentParser, StagingStore};
use crate::presentation::state::AppState;

use super::error_status;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_paths: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<P, C, S>(
    State(state): State<AppState<P, C, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    P: DocumentParser + 'static,
    C: CompletionEngine + 'static,
    S: StagingStore + 'static,
{
    let mut file_paths = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
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
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "Failed to read file bytes");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read file: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        match state.extraction_service.stage_upload(&data, &filename).await {
            Ok(path) => {
                tracing::debug!(filename = %filename, path = %path, "File staged");
                file_paths.push(path.to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "Failed to stage upload");
                return (
                    error_status(&e),
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response();
            }
        }
    }

    if file_paths.is_empty() {
        tracing::warn!("Upload request with no files");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file uploaded".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(files = file_paths.len(), "Files uploaded");
    (StatusCode::OK, Json(UploadResponse { file_paths })).into_response()
}
