use crate::format::{MONEY_DECIMALS, round_half_up};
use crate::normalizer::NormalizedTrade;
use crate::series::accumulate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PoolKind {
    Profit,
    Loss,
}

impl PoolKind {
    pub fn label(&self) -> &'static str {
        match self {
            PoolKind::Profit => "Profit",
            PoolKind::Loss => "Loss",
        }
    }
}

/// One pie slice: a pool and its share of the combined magnitude, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub kind: PoolKind,
    pub percentage: Decimal,
}

impl DistributionSlice {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Splits open-position profit and loss into percentage shares.
#[derive(Debug, Default)]
pub struct DistributionCalculator {}

impl DistributionCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profit slice first, then loss; a pool with no magnitude gets no slice.
    /// Returns nothing when there is no open profit or loss at all.
    pub fn calculate(&self, trades: &[NormalizedTrade]) -> Vec<DistributionSlice> {
        let mut total_profit = Decimal::ZERO;
        let mut total_loss = Decimal::ZERO;
        for trade in trades {
            if trade.profit.is_sign_negative() {
                accumulate(&mut total_loss, trade.profit.abs());
            } else {
                accumulate(&mut total_profit, trade.profit);
            }
        }

        let mut total = total_profit;
        accumulate(&mut total, total_loss);
        if total.is_zero() {
            return Vec::new();
        }

        let hundred = Decimal::ONE_HUNDRED;
        [(PoolKind::Profit, total_profit), (PoolKind::Loss, total_loss)]
            .into_iter()
            .filter(|(_, pool)| *pool > Decimal::ZERO)
            .map(|(kind, pool)| DistributionSlice {
                kind,
                percentage: round_half_up(pool / total * hundred, MONEY_DECIMALS),
            })
            .collect()
    }
}
