//! Shared types and display utilities used across domain modules.

pub mod fmt;

use serde::{Deserialize, Serialize};

// ─── TradeSide ───────────────────────────────────────────────────────────────

/// Spot trade side. Its wire form doubles as the `action` query value on the
/// trading endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_side_serde() {
        let buy: TradeSide = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(buy, TradeSide::Buy);
        let sell: TradeSide = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(sell, TradeSide::Sell);
        assert_eq!(serde_json::to_string(&TradeSide::Buy).unwrap(), "\"buy\"");
    }

    #[test]
    fn test_trade_side_as_str() {
        assert_eq!(TradeSide::Buy.as_str(), "buy");
        assert_eq!(TradeSide::Sell.as_str(), "sell");
        assert_eq!(TradeSide::Sell.to_string(), "sell");
    }
}
