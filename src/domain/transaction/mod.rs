//! Transaction domain — account transaction history.

pub mod client;
