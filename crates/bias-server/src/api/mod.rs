pub mod dto;
pub mod handlers;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Demo page
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze_form))
        // JSON API
        .route("/api/v1/analyze", post(handlers::analyze_json))
}
