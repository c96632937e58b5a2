use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use sbl_protocol::endpoints;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all SBL endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(endpoints::SESSIONS, post(handler::create_session_handler))
        .route(
            endpoints::SESSION,
            get(handler::get_session_handler).delete(handler::delete_session_handler),
        )
        .route(endpoints::RECEIPT, post(handler::upload_receipt_handler))
        .route(endpoints::COMMAND, post(handler::command_handler))
        .route(endpoints::SUMMARY, get(handler::summary_handler))
        .route(endpoints::TRANSCRIPT, get(handler::transcript_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
