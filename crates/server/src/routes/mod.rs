use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

pub mod movie;

/// All application routes, without middleware.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movie::router()).fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
