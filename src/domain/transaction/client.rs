//! Transactions sub-client — account transaction history.

use serde_json::Value;

use crate::client::PanelClient;
use crate::error::ApiError;
use crate::http::RequestOptions;

/// Page size used when the caller does not pass one.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Sub-client for transaction history queries.
pub struct Transactions<'a> {
    pub(crate) client: &'a PanelClient,
}

impl<'a> Transactions<'a> {
    /// Fetch the most recent transactions, newest first.
    pub async fn history(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        self.client
            .http
            .request(
                self.client.endpoints.user.transactions,
                RequestOptions::get()
                    .query("action", "list")
                    .query("limit", limit.to_string()),
            )
            .await
    }
}
