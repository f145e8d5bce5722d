use crate::error::NormalizeError;
use chrono::{DateTime, Utc};
use core_types::{AccountRecord, GroupRecord, TradeRecord, TradeSide};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Display;

/// Currency code some backends report for a group whose currency is not set.
const UNSET_CURRENCY: &str = "N/A";

/// A trade's settlement time and its profit in the reporting currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTrade {
    pub order: u64,
    pub login: u64,
    pub settled_at: DateTime<Utc>,
    pub profit: Decimal,
    /// Profit in the account currency, as the backend reported it.
    pub raw_profit: Decimal,
}

/// A trade that was left out of the aggregates, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTrade {
    pub order: u64,
    pub login: u64,
    pub reason: NormalizeError,
}

/// The result of normalising a whole trade set.
#[derive(Debug, Clone, Default)]
pub struct NormalizationOutcome {
    pub normalized: Vec<NormalizedTrade>,
    pub skipped: Vec<SkippedTrade>,
}

/// Converts trade profit into a single reporting currency.
///
/// The group listing is borrowed for the lifetime of one report; groups are
/// resolved by name and the first match in listing order wins.
#[derive(Debug, Clone)]
pub struct CurrencyNormalizer<'a> {
    reporting_currency: String,
    groups: &'a [GroupRecord],
}

impl<'a> CurrencyNormalizer<'a> {
    pub fn new(reporting_currency: impl Into<String>, groups: &'a [GroupRecord]) -> Self {
        Self {
            reporting_currency: reporting_currency.into(),
            groups,
        }
    }

    pub fn reporting_currency(&self) -> &str {
        &self.reporting_currency
    }

    /// Resolves the currency of `group_name`.
    pub fn group_currency(&self, group_name: &str) -> Result<&'a str, NormalizeError> {
        let group = self
            .groups
            .iter()
            .find(|g| g.group == group_name)
            .ok_or_else(|| NormalizeError::GroupNotFound(group_name.to_string()))?;

        let currency = group.currency.trim();
        if currency.is_empty() || currency.eq_ignore_ascii_case(UNSET_CURRENCY) {
            return Err(NormalizeError::UnknownCurrency {
                group: group.group.clone(),
                currency: group.currency.clone(),
            });
        }
        Ok(currency)
    }

    /// Expresses one trade's profit in the reporting currency.
    ///
    /// `rate` is only consulted when the group currency differs from the
    /// reporting currency; it receives `(from, to, side)` and returns a multiplier.
    pub fn normalize<F, E>(
        &self,
        trade: &TradeRecord,
        account: &AccountRecord,
        rate: F,
    ) -> Result<NormalizedTrade, NormalizeError>
    where
        F: FnOnce(&str, &str, TradeSide) -> Result<Decimal, E>,
        E: Display,
    {
        let currency = self.group_currency(&account.group)?;

        let profit = if currency == self.reporting_currency {
            trade.profit
        } else {
            let multiplier = rate(currency, &self.reporting_currency, trade.side).map_err(|e| {
                NormalizeError::RateUnavailable {
                    from: currency.to_string(),
                    to: self.reporting_currency.clone(),
                    reason: e.to_string(),
                }
            })?;
            trade
                .profit
                .checked_mul(multiplier)
                .ok_or(NormalizeError::ConversionOverflow {
                    order: trade.order,
                    rate: multiplier,
                })?
        };

        Ok(NormalizedTrade {
            order: trade.order,
            login: trade.login,
            settled_at: trade.settled_at(),
            profit,
            raw_profit: trade.profit,
        })
    }

    /// Normalises every trade, collecting the ones that had to be skipped.
    ///
    /// `account` resolves a login to its account record. Each skip is logged at
    /// `warn` level; the loop never stops early.
    pub fn normalize_all<A, AE, R, RE>(
        &self,
        trades: &[TradeRecord],
        mut account: A,
        mut rate: R,
    ) -> NormalizationOutcome
    where
        A: FnMut(u64) -> Result<AccountRecord, AE>,
        AE: Display,
        R: FnMut(&str, &str, TradeSide) -> Result<Decimal, RE>,
        RE: Display,
    {
        let mut outcome = NormalizationOutcome {
            normalized: Vec::with_capacity(trades.len()),
            skipped: Vec::new(),
        };

        for trade in trades {
            let result = account(trade.login)
                .map_err(|e| NormalizeError::AccountNotFound {
                    login: trade.login,
                    reason: e.to_string(),
                })
                .and_then(|acc| self.normalize(trade, &acc, &mut rate));

            match result {
                Ok(normalized) => outcome.normalized.push(normalized),
                Err(reason) => {
                    tracing::warn!(
                        order = trade.order,
                        login = trade.login,
                        %reason,
                        "Skipping trade: profit could not be normalized."
                    );
                    outcome.skipped.push(SkippedTrade {
                        order: trade.order,
                        login: trade.login,
                        reason,
                    });
                }
            }
        }

        outcome
    }
}
