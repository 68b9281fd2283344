//! Data Transfer Objects for request/response serialization.

pub mod health;
pub mod hello;
pub mod shorten;
