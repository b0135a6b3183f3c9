//! Display formatting for panel values.
//!
//! The panel renders amounts in the Turkish locale; these helpers mirror
//! what the UI shows so logs and native frontends agree with the web panel.

pub mod date;
pub mod num;

pub use date::format_date;
pub use num::{
    format_currency, format_currency_with, format_number, format_number_with,
    format_percentage, format_percentage_with,
};
