//! Position domain — leveraged position listing, opening and closing.

pub mod client;
pub mod wire;
