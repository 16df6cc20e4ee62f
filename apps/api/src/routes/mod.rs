pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::letters::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Letters API
        .route("/api/v1/letters", post(handlers::handle_generate_letter))
        .route(
            handlers::DOWNLOAD_ROUTE,
            get(handlers::handle_download_letter),
        )
        // Uploaded CVs are whole PDFs; the 2 MB Axum default is too small.
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .with_state(state)
}
