use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CompletionEngine, DocumentParser, StagingStore};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    extract_handler, health_handler, map_columns_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<P, C, S>(state: AppState<P, C, S>) -> Router
where
    P: DocumentParser + 'static,
    C: CompletionEngine + 'static,
    S: StagingStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/files/upload/", post(upload_handler::<P, C, S>))
        .route("/v1/files/extract/", post(extract_handler::<P, C, S>))
        .route(
            "/v1/files/map-columns/",
            post(map_columns_handler::<P, C, S>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
