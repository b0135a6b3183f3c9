//! Deposits sub-client — deposit requests and history.

use serde::Serialize;
use serde_json::Value;

use crate::client::PanelClient;
use crate::error::ApiError;
use crate::http::{Body, RequestOptions};

/// Sub-client for deposit operations.
pub struct Deposits<'a> {
    pub(crate) client: &'a PanelClient,
}

impl<'a> Deposits<'a> {
    /// Create a deposit request. The payload is forwarded as-is; the backend
    /// validates it.
    pub async fn create<T: Serialize>(&self, request: &T) -> Result<Value, ApiError> {
        self.client
            .http
            .request(
                self.client.endpoints.user.deposits,
                RequestOptions::post(Body::Json(serde_json::to_value(request)?))
                    .query("action", "create"),
            )
            .await
    }

    /// List the user's past deposit requests.
    pub async fn history(&self) -> Result<Value, ApiError> {
        self.client
            .http
            .request(
                self.client.endpoints.user.deposits,
                RequestOptions::get().query("action", "list"),
            )
            .await
    }
}
