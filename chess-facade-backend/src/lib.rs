pub mod config;
mod docs;
mod error;
pub mod models;
mod routes;
pub mod shapers;
pub mod validation;

pub use docs::ApiDoc;
pub use error::{RATING_HISTORY_NOT_FOUND, SERVER_ERROR, USER_NOT_FOUND};

use axum::{Router, http::StatusCode, routing::get};
use lichess_client::LichessClient;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub struct AppState {
    pub lichess: LichessClient,
}

/// Create the application router against the given lichess client
pub fn create_app(lichess: LichessClient, request_timeout: Duration) -> Router {
    let state = Arc::new(AppState { lichess });

    let chess_routes = Router::new()
        .route("/chess/top10", get(routes::top_ten))
        .route("/chess/user", get(routes::user))
        .route("/chess/user/enriched", get(routes::enriched_user))
        .route("/chess/topPlayerHistory", get(routes::top_player_history));

    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .merge(chess_routes)
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
