//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted candidate.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.freecodecamp.org" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Returns `{ "error": "invalid url" }` when the candidate fails the scheme
/// check or its host does not resolve. The two cases are deliberately
/// indistinguishable in the response.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let record = state.shortener.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        original_url: record.original_url,
        short_url: record.id,
    }))
}
