//! Business logic services.

pub mod shortener_service;
pub mod url_validator;

pub use shortener_service::{ShortenError, ShortenerService};
pub use url_validator::{UrlValidator, ValidationError};
