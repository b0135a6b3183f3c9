//! Deposit domain — deposit requests and their history.

pub mod client;
