use crate::error::BackendError;
use crate::mask::GroupMask;
use crate::TradingBackend;
use core_types::{AccountRecord, GroupRecord, TimeWindow, TradeRecord, TradeSide};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A quoted conversion between two currencies.
///
/// Buy trades convert at `bid`, sell trades at `ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub from: String,
    pub to: String,
    pub bid: Decimal,
    pub ask: Decimal,
}

/// Everything an in-memory backend serves. Trades without a `close_time` are
/// open positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub trades: Vec<TradeRecord>,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
    #[serde(default)]
    pub rates: Vec<RateQuote>,
}

/// A backend serving a fixed dataset, typically loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    dataset: Dataset,
    accounts: HashMap<u64, usize>,
}

impl InMemoryBackend {
    pub fn new(dataset: Dataset) -> Self {
        // The first account listed for a login wins.
        let mut accounts = HashMap::with_capacity(dataset.accounts.len());
        for (index, account) in dataset.accounts.iter().enumerate() {
            accounts.entry(account.login).or_insert(index);
        }
        Self { dataset, accounts }
    }

    pub fn from_json_str(json: &str) -> Result<Self, BackendError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| BackendError::DatasetIo {
            path: path.display().to_string(),
            source,
        })?;
        let backend = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            trades = backend.dataset.trades.len(),
            accounts = backend.dataset.accounts.len(),
            groups = backend.dataset.groups.len(),
            "Loaded trading dataset."
        );
        Ok(backend)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn account(&self, login: u64) -> Option<&AccountRecord> {
        self.accounts.get(&login).map(|&i| &self.dataset.accounts[i])
    }

    /// Trades whose owner belongs to a group selected by `mask` and whose
    /// relevant timestamp falls in `window`.
    fn select_trades<F>(&self, group_mask: &str, window: &TimeWindow, keep: F) -> Vec<TradeRecord>
    where
        F: Fn(&TradeRecord, &TimeWindow) -> bool,
    {
        let mask = GroupMask::parse(group_mask);
        self.dataset
            .trades
            .iter()
            .filter(|trade| keep(trade, window))
            .filter(|trade| match self.account(trade.login) {
                Some(account) => mask.matches(&account.group),
                // Without an account we cannot tell the group; only an
                // unrestricted mask lets such trades through.
                None => group_mask.trim().is_empty(),
            })
            .cloned()
            .collect()
    }
}

impl TradingBackend for InMemoryBackend {
    fn fetch_close_trades(
        &self,
        group_mask: &str,
        window: &TimeWindow,
    ) -> Result<Vec<TradeRecord>, BackendError> {
        Ok(self.select_trades(group_mask, window, |trade, window| {
            trade.close_time.is_some_and(|closed| window.contains(closed))
        }))
    }

    fn fetch_open_trades(
        &self,
        group_mask: &str,
        window: &TimeWindow,
    ) -> Result<Vec<TradeRecord>, BackendError> {
        Ok(self.select_trades(group_mask, window, |trade, window| {
            trade.is_open() && window.contains(trade.open_time)
        }))
    }

    fn fetch_all_groups(&self) -> Result<Vec<GroupRecord>, BackendError> {
        Ok(self.dataset.groups.clone())
    }

    fn fetch_account_by_login(&self, login: u64) -> Result<AccountRecord, BackendError> {
        self.account(login)
            .cloned()
            .ok_or(BackendError::AccountNotFound(login))
    }

    fn convert_rate(&self, from: &str, to: &str, side: TradeSide) -> Result<Decimal, BackendError> {
        if from.eq_ignore_ascii_case(to) {
            return Ok(Decimal::ONE);
        }

        let unavailable = || BackendError::RateUnavailable {
            from: from.to_string(),
            to: to.to_string(),
        };

        let same_pair = |quote: &&RateQuote, a: &str, b: &str| {
            quote.from.eq_ignore_ascii_case(a) && quote.to.eq_ignore_ascii_case(b)
        };

        if let Some(quote) = self.dataset.rates.iter().find(|q| same_pair(q, from, to)) {
            let rate = match side {
                TradeSide::Buy => quote.bid,
                TradeSide::Sell => quote.ask,
            };
            return Ok(rate);
        }

        // Fall back to the inverse quote, crossing the spread the other way.
        let quote = self
            .dataset
            .rates
            .iter()
            .find(|q| same_pair(q, to, from))
            .ok_or_else(unavailable)?;
        let inverse = match side {
            TradeSide::Buy => quote.ask,
            TradeSide::Sell => quote.bid,
        };
        if inverse.is_zero() {
            return Err(unavailable());
        }
        Ok(Decimal::ONE / inverse)
    }
}
