//! High-level client — `PanelClient` with nested sub-client accessors.
//!
//! Each backend area has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::auth::client::Auth;
use crate::domain::deposit::client::Deposits;
use crate::domain::position::client::Positions;
use crate::domain::trading::client::Trading;
use crate::domain::transaction::client::Transactions;
use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::http::PanelHttp;
use crate::network;

// Re-export sub-client types for convenience.
pub use crate::domain::auth::client::Auth as AuthClient;
pub use crate::domain::deposit::client::Deposits as DepositsClient;
pub use crate::domain::position::client::Positions as PositionsClient;
pub use crate::domain::trading::client::Trading as TradingClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;

/// The primary entry point for the panel SDK.
///
/// Provides nested sub-client accessors for each backend area:
/// `client.auth()`, `client.trading()`, etc. The client holds no per-user
/// state of its own; the session lives in the credential store attached to
/// every request.
#[derive(Clone)]
pub struct PanelClient {
    pub(crate) http: PanelHttp,
    pub(crate) endpoints: Endpoints,
}

impl PanelClient {
    pub fn builder() -> PanelClientBuilder {
        PanelClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn trading(&self) -> Trading<'_> {
        Trading { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn deposits(&self) -> Deposits<'_> {
        Deposits { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    /// The resolved backend base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PanelClientBuilder {
    base_url: String,
    endpoints: Endpoints,
}

impl Default for PanelClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::SIBLING_RELATIVE_BASE.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl PanelClientBuilder {
    /// Use an explicit base URL (absolute URLs for native deployments).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Resolve the base path from the hosting page's path (browser
    /// deployments; see [`network::resolve_base_path`]).
    pub fn page_path(mut self, path: &str) -> Self {
        self.base_url = network::resolve_base_path(path).to_string();
        self
    }

    /// Override the endpoint table.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn build(self) -> Result<PanelClient, ApiError> {
        Ok(PanelClient {
            http: PanelHttp::new(&self.base_url),
            endpoints: self.endpoints,
        })
    }
}
