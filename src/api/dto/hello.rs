//! DTO for the API greeting endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: &'static str,
}
