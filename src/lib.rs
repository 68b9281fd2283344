//! # URL Shortener Microservice
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `UrlRecord` entity, the repository
//!   trait, and identifier allocation
//! - **Application Layer** ([`application`]) - The validation pipeline and
//!   creation/lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and
//!   system DNS resolution
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Behavior
//!
//! A submitted URL passes a two-stage validation pipeline: a syntactic
//! http/https scheme check, then a live host resolution. Accepted URLs get a
//! monotonically increasing numeric identifier starting at 1 and are stored
//! exactly as submitted. Looking an identifier up redirects to the stored URL.
//! State lives only in process memory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export RESOLVE_TIMEOUT_MS="3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenError, ShortenerService, UrlValidator};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
