use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a trade as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_renders_lowercase() {
        assert_eq!(TradeSide::Sell.to_string(), "sell");
        assert_eq!(serde_json::to_value(TradeSide::Buy).unwrap(), "buy");
    }

    #[test]
    fn side_parses_from_lowercase() {
        let side: TradeSide = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, TradeSide::Sell);
        assert!(serde_json::from_str::<TradeSide>("\"short\"").is_err());
    }
}
