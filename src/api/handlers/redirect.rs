//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// # Behavior
///
/// Looks the identifier up in the store and answers with a
/// 307 Temporary Redirect to the stored URL. The handler reports the target;
/// following it is the client's job.
///
/// # Errors
///
/// Returns `{ "error": "No short URL found for given input" }` for unknown
/// identifiers. A path segment that is not a positive integer cannot name a
/// stored record, so it gets the same not-found response.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let id: u64 = id.parse().map_err(|_| {
        debug!(input = %id, "non-numeric short url id");
        AppError::NotFound
    })?;

    let record = state.shortener.resolve(id).await?;

    Ok(Redirect::temporary(&record.original_url))
}
