//! Auth domain — session establishment, profile, teardown.

pub mod client;
