//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes served under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`          - Smoke-test greeting
/// - `POST /shorturl`       - Create a short URL
/// - `GET  /shorturl/{id}`  - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{id}", get(redirect_handler))
}
