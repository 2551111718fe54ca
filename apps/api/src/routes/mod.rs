pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::parsing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/parse",
            post(handlers::handle_parse_upload),
        )
        .with_state(state)
}
