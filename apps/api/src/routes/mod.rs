pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/letters/options",
            get(handlers::handle_form_options),
        )
        .route("/api/v1/letters", post(handlers::handle_generate_letter))
        .route(
            "/api/v1/letters/download",
            post(handlers::handle_download_letter),
        )
        .with_state(state)
}
