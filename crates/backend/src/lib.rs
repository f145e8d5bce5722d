//! # Trading Backend
//!
//! The record store the reports read from: trades, accounts, groups and currency
//! conversion rates. Reports only see the [`TradingBackend`] trait, so the store
//! behind it (a live server bridge, or the JSON dataset in [`memory`]) can be
//! swapped out without touching report code.

pub mod error;
pub mod mask;
pub mod memory;

pub use error::BackendError;
pub use mask::GroupMask;
pub use memory::{Dataset, InMemoryBackend, RateQuote};

use core_types::{AccountRecord, GroupRecord, TimeWindow, TradeRecord, TradeSide};
use rust_decimal::Decimal;

/// The capabilities a report consumes from the trading backend.
///
/// Every call is synchronous and may fail on its own; callers decide whether a
/// failure drops one record or the whole set.
pub trait TradingBackend: Send + Sync {
    /// Closed trades of accounts matching `group_mask`, closed within `window`.
    fn fetch_close_trades(
        &self,
        group_mask: &str,
        window: &TimeWindow,
    ) -> Result<Vec<TradeRecord>, BackendError>;

    /// Open positions of accounts matching `group_mask`, opened within `window`.
    fn fetch_open_trades(
        &self,
        group_mask: &str,
        window: &TimeWindow,
    ) -> Result<Vec<TradeRecord>, BackendError>;

    /// All trader groups, in the backend's listing order.
    fn fetch_all_groups(&self) -> Result<Vec<GroupRecord>, BackendError>;

    fn fetch_account_by_login(&self, login: u64) -> Result<AccountRecord, BackendError>;

    /// Multiplier converting an amount in `from` into `to` for a trade on `side`.
    fn convert_rate(&self, from: &str, to: &str, side: TradeSide) -> Result<Decimal, BackendError>;
}
