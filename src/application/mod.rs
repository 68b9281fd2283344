//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: the validation pipeline and the
//! creation/lookup flows. Services consume the repository and resolver traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - two-stage candidate URL validation
//! - [`services::shortener_service::ShortenerService`] - creation and lookup orchestration

pub mod services;
