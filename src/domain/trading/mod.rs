//! Trading domain — spot portfolio and trade execution.

pub mod client;
