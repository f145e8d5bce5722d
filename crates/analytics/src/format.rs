//! Rounding and text formatting used by every chart and table in a report.
//!
//! Policy: round half away from zero to a fixed number of decimals. Counts, ids
//! and volumes use [`COUNT_DECIMALS`]; money, prices and percentages use
//! [`MONEY_DECIMALS`].

use rust_decimal::{Decimal, RoundingStrategy};

pub const COUNT_DECIMALS: u32 = 0;
pub const MONEY_DECIMALS: u32 = 2;

/// Rounds `value` to `decimals` places, halves away from zero.
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `value` with exactly `decimals` digits after the point.
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = round_half_up(value, decimals);
    format!("{:.*}", decimals as usize, rounded)
}

/// Money, prices, swap and commission.
pub fn format_money(value: Decimal) -> String {
    format_fixed(value, MONEY_DECIMALS)
}
