mod extract;
mod health;
mod map_columns;
mod upload;

use axum::http::StatusCode;

use crate::application::services::ExtractionError;

pub use extract::extract_handler;
pub use health::health_handler;
pub use map_columns::map_columns_handler;
pub use upload::upload_handler;

/// HTTP status for a pipeline failure. User errors map to 4xx; collaborator
/// and extraction failures surface as 502 rather than being retried or
/// defaulted.
pub(crate) fn error_status(error: &ExtractionError) -> StatusCode {
    match error {
        ExtractionError::UnsupportedExtension(_) | ExtractionError::CsvHeaders(_) => {
            StatusCode::BAD_REQUEST
        }
        ExtractionError::UnsupportedCategory(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ExtractionError::Extractor(_) | ExtractionError::Parsing(_) => StatusCode::BAD_GATEWAY,
        ExtractionError::CategoryMismatch { .. } | ExtractionError::Staging(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
