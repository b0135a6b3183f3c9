//! Wire types for leveraged position requests.
//!
//! The positions endpoint multiplexes its operations through an `action`
//! discriminator inside the JSON body rather than the query string.

use rust_decimal::Decimal;
use serde::Serialize;

pub(crate) const ACTION_OPEN: &str = "open_position";
pub(crate) const ACTION_CLOSE: &str = "close_position";

/// JSON body for `close_position`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClosePositionRequest {
    pub action: &'static str,
    pub position_id: u64,
    pub close_price: Decimal,
}

impl ClosePositionRequest {
    pub fn new(position_id: u64, close_price: Decimal) -> Self {
        Self {
            action: ACTION_CLOSE,
            position_id,
            close_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_close_position_request_serializes_discriminator() {
        let req = ClosePositionRequest::new(42, dec!(61250.5));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["action"], "close_position");
        assert_eq!(json["position_id"], 42);
        // Decimal goes over the wire as a string.
        assert_eq!(json["close_price"], "61250.5");
    }
}
