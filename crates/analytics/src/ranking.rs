use core_types::TradeRecord;
use std::cmp::Ordering;

/// How many trades a ranking table shows unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// A trade borrowed from the fetched set together with its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTrade<'a> {
    pub rank: usize,
    pub trade: &'a TradeRecord,
}

/// Selects the best and worst trades by raw profit.
///
/// Selection is stable: trades with equal profit keep their input order.
/// The input slice is never reordered.
#[derive(Debug, Clone, Copy)]
pub struct RankingSelector {
    limit: usize,
}

impl Default for RankingSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl RankingSelector {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Up to `limit` trades with the largest profit, descending.
    pub fn top_profit<'a>(&self, trades: &'a [TradeRecord]) -> Vec<RankedTrade<'a>> {
        self.select(trades, |a, b| b.profit.cmp(&a.profit))
    }

    /// Up to `limit` trades with the smallest profit, ascending.
    pub fn top_loss<'a>(&self, trades: &'a [TradeRecord]) -> Vec<RankedTrade<'a>> {
        self.select(trades, |a, b| a.profit.cmp(&b.profit))
    }

    fn select<'a, F>(&self, trades: &'a [TradeRecord], compare: F) -> Vec<RankedTrade<'a>>
    where
        F: Fn(&TradeRecord, &TradeRecord) -> Ordering,
    {
        let mut ordered: Vec<&'a TradeRecord> = trades.iter().collect();
        // `sort_by` is stable, which is what keeps ties in input order.
        ordered.sort_by(|a, b| compare(a, b));
        ordered
            .into_iter()
            .take(self.limit)
            .enumerate()
            .map(|(i, trade)| RankedTrade { rank: i + 1, trade })
            .collect()
    }
}
