//! HTTP layer — the request executor behind every facade operation.

pub mod client;

pub use client::{Body, PanelHttp, RequestOptions};
