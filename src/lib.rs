//! # Trading Panel SDK
//!
//! A Rust client for the trading panel's HTTP backend, usable from both
//! native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Endpoint registry, base-path resolution, shared types and
//!    formatting, errors (always available, WASM-safe)
//! 2. **HTTP** — `PanelHttp`, the request executor behind every operation
//! 3. **High-Level Client** — `PanelClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradepanel_sdk::prelude::*;
//!
//! let client = PanelClient::builder()
//!     .page_path("/panel/user-panel-v2/index.html")
//!     .build()?;
//!
//! client.auth().login("demo", "hunter2").await?;
//! let portfolio = client.trading().portfolio().await?;
//! ```
//!
//! Every operation resolves to a single request; failures surface as one
//! [`error::ApiError`] shape whether the backend rejected the call or the
//! transport never produced a response.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Static endpoint registry.
pub mod endpoints;

/// SDK error type.
pub mod error;

/// Backend base-path resolution.
pub mod network;

/// Shared types and display formatting.
pub mod shared;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request executor.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PanelClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

/// Per-area sub-clients and wire types.
#[cfg(feature = "http")]
pub mod domain;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Core
    pub use crate::endpoints::Endpoints;
    pub use crate::error::ApiError;
    pub use crate::network::{resolve_base_path, PANEL_MOUNT_SEGMENT};
    pub use crate::shared::{fmt, TradeSide};

    // Wire types
    #[cfg(feature = "http")]
    pub use crate::domain::position::wire::ClosePositionRequest;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, DepositsClient, PanelClient, PanelClientBuilder, PositionsClient,
        TradingClient, TransactionsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{Body, PanelHttp, RequestOptions};
}
