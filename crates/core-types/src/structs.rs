use crate::enums::TradeSide;
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single trade (closed deal or open position) as stored by the trading backend.
///
/// Monetary fields are in the currency of the owning account's group.
/// Timestamps travel as epoch seconds on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub order: u64,
    pub login: u64,
    pub symbol: String,
    pub side: TradeSide,
    /// Volume in hundredths of a lot, exactly as the backend reports it.
    pub volume: u64,
    pub open_price: Decimal,
    pub close_price: Decimal,
    #[serde(default)]
    pub stop_loss: Decimal,
    #[serde(default)]
    pub take_profit: Decimal,
    pub profit: Decimal,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(default)]
    pub storage: Decimal,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub open_time: DateTime<Utc>,
    /// `None` while the position is still open.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub close_time: Option<DateTime<Utc>>,
}

impl TradeRecord {
    pub fn is_open(&self) -> bool {
        self.close_time.is_none()
    }

    /// The moment the trade's profit was last settled: its close time, or the
    /// open time for positions that are still running.
    pub fn settled_at(&self) -> DateTime<Utc> {
        self.close_time.unwrap_or(self.open_time)
    }
}

/// A trader account. Only the fields a report needs are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub login: u64,
    pub name: String,
    pub group: String,
}

/// A trader group and the currency its accounts are denominated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub group: String,
    pub currency: String,
}

/// An optional, inclusive time range. A missing bound excludes nothing on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TimeWindow {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// A window that excludes nothing.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builds a window from optional epoch-second bounds.
    pub fn from_epoch_seconds(from: Option<i64>, to: Option<i64>) -> Result<Self, CoreError> {
        let convert = |secs: i64| {
            DateTime::<Utc>::from_timestamp(secs, 0).ok_or(CoreError::InvalidTimestamp(secs))
        };
        Ok(Self {
            from: from.map(convert).transpose()?,
            to: to.map(convert).transpose()?,
        })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let after_start = self.from.is_none_or(|from| instant >= from);
        let before_end = self.to.is_none_or(|to| instant <= to);
        after_start && before_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn unbounded_window_contains_everything() {
        let window = TimeWindow::unbounded();
        assert!(window.contains(Utc.timestamp_opt(0, 0).unwrap()));
        assert!(window.contains(Utc.timestamp_opt(4_000_000_000, 0).unwrap()));
    }

    #[test]
    fn half_open_window_only_checks_present_bound() {
        let window = TimeWindow::from_epoch_seconds(Some(1_000), None).unwrap();
        assert!(!window.contains(Utc.timestamp_opt(999, 0).unwrap()));
        assert!(window.contains(Utc.timestamp_opt(1_000, 0).unwrap()));
        assert!(window.contains(Utc.timestamp_opt(9_999_999, 0).unwrap()));

        let window = TimeWindow::from_epoch_seconds(None, Some(1_000)).unwrap();
        assert!(window.contains(Utc.timestamp_opt(0, 0).unwrap()));
        assert!(!window.contains(Utc.timestamp_opt(1_001, 0).unwrap()));
    }

    #[test]
    fn out_of_range_epoch_is_rejected() {
        assert!(TimeWindow::from_epoch_seconds(Some(i64::MAX), None).is_err());
    }

    #[test]
    fn trade_record_reads_epoch_seconds() {
        let raw = serde_json::json!({
            "order": 5,
            "login": 1001,
            "symbol": "EURUSD",
            "side": "buy",
            "volume": 100,
            "open_price": 1.0712,
            "close_price": 1.0755,
            "profit": 430.0,
            "open_time": 1_762_905_600,
            "close_time": 1_762_909_200
        });
        let trade: TradeRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(trade.profit, dec!(430));
        assert_eq!(trade.storage, Decimal::ZERO);
        assert!(!trade.is_open());
        assert_eq!(trade.settled_at().timestamp(), 1_762_909_200);
    }

    #[test]
    fn open_position_settles_at_open_time() {
        let raw = serde_json::json!({
            "order": 6,
            "login": 1001,
            "symbol": "XAUUSD",
            "side": "sell",
            "volume": 10,
            "open_price": 2650.5,
            "close_price": 2648.0,
            "profit": 25.0,
            "open_time": 1_762_905_600
        });
        let trade: TradeRecord = serde_json::from_value(raw).unwrap();
        assert!(trade.is_open());
        assert_eq!(trade.settled_at(), trade.open_time);
    }
}
