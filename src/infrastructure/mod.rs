//! Infrastructure layer: storage and external integrations.
//!
//! - [`persistence`] - in-memory implementation of the repository traits
//! - [`resolver`] - outbound host resolution (system DNS)

pub mod persistence;
pub mod resolver;
