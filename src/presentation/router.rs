use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{analyze_handler, chat_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, L>(state: AppState<E, L>) -> Router
where
    E: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Only the model endpoints are opened cross-origin. Uploads carry whole
    // PDFs, so the default multipart body limit is lifted.
    let model_routes = Router::new()
        .route("/analyze", post(analyze_handler::<E, L>))
        .route("/chat", post(chat_handler::<E, L>))
        .layer(DefaultBodyLimit::disable())
        .layer(cors);

    Router::new()
        .route("/health", get(health_handler))
        .merge(model_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .with_state(state)
}
