use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::ShortenError;

/// Flat error body: `{ "error": "<message>" }`.
///
/// Both validation failure kinds share one message by design; a caller
/// cannot tell a malformed URL from an unresolvable host.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    InvalidUrl,
    NotFound,
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidUrl(_) => AppError::InvalidUrl,
            ShortenError::NotFound => AppError::NotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidUrl => (StatusCode::BAD_REQUEST, "invalid url"),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "No short URL found for given input",
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ValidationError;

    #[test]
    fn test_both_validation_kinds_collapse_to_invalid_url() {
        let malformed: AppError = ShortenError::InvalidUrl(ValidationError::MalformedUrl).into();
        let unresolvable: AppError = ShortenError::InvalidUrl(
            ValidationError::UnresolvableHost("nope".to_string()),
        )
        .into();

        assert_eq!(malformed, AppError::InvalidUrl);
        assert_eq!(unresolvable, AppError::InvalidUrl);
    }

    #[test]
    fn test_not_found_mapping() {
        let err: AppError = ShortenError::NotFound.into();
        assert_eq!(err, AppError::NotFound);
    }
}
