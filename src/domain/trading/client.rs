//! Trading sub-client — portfolio and spot trade execution.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::client::PanelClient;
use crate::error::ApiError;
use crate::http::{Body, RequestOptions};
use crate::shared::TradeSide;

/// Sub-client for spot trading operations.
pub struct Trading<'a> {
    pub(crate) client: &'a PanelClient,
}

impl<'a> Trading<'a> {
    /// Fetch the user's spot portfolio.
    pub async fn portfolio(&self) -> Result<Value, ApiError> {
        self.client
            .http
            .request(
                self.client.endpoints.user.trading,
                RequestOptions::get().query("action", "portfolio"),
            )
            .await
    }

    /// Execute a spot trade. The side selects the `action` query value.
    ///
    /// The legacy endpoint takes multipart form fields under the panel's
    /// original Turkish names (`miktar` = amount, `fiyat` = price).
    pub async fn execute(
        &self,
        side: TradeSide,
        coin_id: &str,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Value, ApiError> {
        let fields = vec![
            ("coin_id", coin_id.to_string()),
            ("miktar", amount.to_string()),
            ("fiyat", price.to_string()),
        ];
        self.client
            .http
            .request(
                self.client.endpoints.user.trading,
                RequestOptions::post(Body::Form(fields)).query("action", side.as_str()),
            )
            .await
    }
}
