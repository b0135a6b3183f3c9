//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `client.rs` — sub-client with that endpoint's operations
//! - `wire.rs` — serde structs for JSON request payloads, where the endpoint
//!   takes them (the legacy endpoints take multipart form fields instead)

pub mod auth;
pub mod deposit;
pub mod position;
pub mod trading;
pub mod transaction;
