use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionEngine, DocumentParser, StagingStore};
use crate::domain::MappingCategory;
use crate::presentation::state::AppState;

use super::error_status;

#[derive(Debug, Deserialize)]
pub struct MapColumnsParams {
    pub category: MappingCategory,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn map_columns_handler<P, C, S>(
    State(state): State<AppState<P, C, S>>,
    Query(params): Query<MapColumnsParams>,
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
            tracing::warn!("Map-columns request with no file");
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
    let content_type = field.content_type().unwrap_or("text/csv").to_string();

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
        .map_columns(&data, &filename, &content_type, params.category)
        .await
    {
        Ok(response) => {
            tracing::info!(filename = %filename, "Column mapping successful");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, filename = %filename, "Column mapping failed");
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
