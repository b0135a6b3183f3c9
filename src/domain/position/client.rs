//! Positions sub-client — leveraged position queries and lifecycle.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::client::PanelClient;
use crate::domain::position::wire::{ClosePositionRequest, ACTION_OPEN};
use crate::error::ApiError;
use crate::http::{Body, RequestOptions};

/// Sub-client for leveraged position operations.
pub struct Positions<'a> {
    pub(crate) client: &'a PanelClient,
}

impl<'a> Positions<'a> {
    /// List the user's open positions.
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client
            .http
            .request(
                self.client.endpoints.user.positions,
                RequestOptions::get().query("action", "positions"),
            )
            .await
    }

    /// Open a leveraged position.
    ///
    /// `request` must serialize to a JSON object; the `open_position`
    /// discriminator is merged into it before dispatch, so callers only
    /// supply the position parameters themselves.
    pub async fn open<T: Serialize>(&self, request: &T) -> Result<Value, ApiError> {
        let mut body = serde_json::to_value(request)?;
        match body.as_object_mut() {
            Some(map) => {
                map.insert("action".to_string(), Value::String(ACTION_OPEN.to_string()));
            }
            None => {
                return Err(ApiError::transport(
                    "position request must serialize to a JSON object",
                ))
            }
        }
        self.client
            .http
            .request(
                self.client.endpoints.user.positions,
                RequestOptions::post(Body::Json(body)),
            )
            .await
    }

    /// Close an open position at the given price.
    pub async fn close(&self, position_id: u64, close_price: Decimal) -> Result<Value, ApiError> {
        let body = ClosePositionRequest::new(position_id, close_price);
        self.client
            .http
            .request(
                self.client.endpoints.user.positions,
                RequestOptions::post(Body::Json(serde_json::to_value(&body)?)),
            )
            .await
    }
}
