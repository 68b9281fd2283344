//! Handler for the API greeting endpoint.

use axum::Json;

use crate::api::dto::hello::Greeting;

/// Smoke-test route.
///
/// # Endpoint
///
/// `GET /api/hello`
pub async fn hello_handler() -> Json<Greeting> {
    Json(Greeting {
        greeting: "hello API",
    })
}
