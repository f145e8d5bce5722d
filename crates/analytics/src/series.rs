use crate::normalizer::NormalizedTrade;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Day keys are `YYYY.MM.DD`, so lexicographic order is chronological order.
pub const DAY_KEY_FORMAT: &str = "%Y.%m.%d";

/// Where a calendar day starts when bucketing close times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    /// The host's local time zone.
    #[default]
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl DayBoundary {
    pub fn utc() -> Self {
        DayBoundary::Fixed(Utc.fix())
    }

    /// `None` when the offset is outside ±24h.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(DayBoundary::Fixed)
    }

    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            DayBoundary::Local => instant.with_timezone(&Local).date_naive(),
            DayBoundary::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }

    pub fn day_key(&self, instant: DateTime<Utc>) -> String {
        self.date_of(instant).format(DAY_KEY_FORMAT).to_string()
    }
}

/// Profit, loss and net result of one calendar day, in the reporting currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub day: String,
    pub profit: Decimal,
    /// Sum of losing trades; zero or negative.
    pub loss: Decimal,
    pub total: Decimal,
}

impl DailyBucket {
    fn empty(day: String) -> Self {
        Self {
            day,
            profit: Decimal::ZERO,
            loss: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Number of winning and losing trades closed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountBucket {
    pub day: String,
    pub profit: u64,
    pub loss: u64,
}

/// Buckets trades into calendar days.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSeriesAggregator {
    boundary: DayBoundary,
}

impl TimeSeriesAggregator {
    pub fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }

    /// One bucket per distinct settlement day, ascending by day.
    ///
    /// Positive values accumulate into `profit`, everything else into `loss`;
    /// `total` always receives the raw value.
    pub fn build_pnl_series(&self, trades: &[NormalizedTrade]) -> Vec<DailyBucket> {
        let mut days: BTreeMap<String, DailyBucket> = BTreeMap::new();

        for trade in trades {
            let key = self.boundary.day_key(trade.settled_at);
            let bucket = days
                .entry(key)
                .or_insert_with_key(|day| DailyBucket::empty(day.clone()));

            if trade.profit > Decimal::ZERO {
                accumulate(&mut bucket.profit, trade.profit);
            } else {
                accumulate(&mut bucket.loss, trade.profit);
            }
            accumulate(&mut bucket.total, trade.profit);
        }

        tracing::debug!(trades = trades.len(), days = days.len(), "Built profit/loss series.");
        days.into_values().collect()
    }

    /// Counts winning and losing trades per day from the sign of the profit in
    /// the account currency. A zero-profit trade counts as a loss.
    pub fn build_count_series(&self, trades: &[NormalizedTrade]) -> Vec<CountBucket> {
        let mut days: BTreeMap<String, CountBucket> = BTreeMap::new();

        for trade in trades {
            let key = self.boundary.day_key(trade.settled_at);
            let bucket = days.entry(key).or_insert_with_key(|day| CountBucket {
                day: day.clone(),
                profit: 0,
                loss: 0,
            });

            if trade.raw_profit > Decimal::ZERO {
                bucket.profit += 1;
            } else {
                bucket.loss += 1;
            }
        }

        tracing::debug!(trades = trades.len(), days = days.len(), "Built trade count series.");
        days.into_values().collect()
    }
}

/// Adds `value` to `sum`, pinning the sum at the representable limit instead of
/// overflowing.
pub(crate) fn accumulate(sum: &mut Decimal, value: Decimal) {
    *sum = sum.checked_add(value).unwrap_or_else(|| {
        tracing::warn!(%value, "Decimal sum overflowed; pinning at the limit.");
        if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn normalized(order: u64, settled_at: DateTime<Utc>, profit: Decimal) -> NormalizedTrade {
        NormalizedTrade { order, login: 1, settled_at, profit, raw_profit: profit }
    }

    #[test]
    fn same_day_trades_share_one_bucket() {
        let trades = vec![
            normalized(1, at(2025, 11, 12, 8), dec!(500)),
            normalized(2, at(2025, 11, 12, 12), dec!(-100)),
            normalized(3, at(2025, 11, 12, 20), dec!(50)),
        ];
        let series = TimeSeriesAggregator::new(DayBoundary::utc()).build_pnl_series(&trades);
        assert_eq!(
            series,
            vec![DailyBucket {
                day: "2025.11.12".to_string(),
                profit: dec!(550),
                loss: dec!(-100),
                total: dec!(450),
            }]
        );
    }

    #[test]
    fn buckets_are_sorted_by_day() {
        let trades = vec![
            normalized(1, at(2025, 11, 14, 8), dec!(10)),
            normalized(2, at(2025, 11, 2, 8), dec!(20)),
            normalized(3, at(2025, 10, 30, 8), dec!(0)),
        ];
        let series = TimeSeriesAggregator::new(DayBoundary::utc()).build_pnl_series(&trades);
        let days: Vec<&str> = series.iter().map(|b| b.day.as_str()).collect();
        assert_eq!(days, vec!["2025.10.30", "2025.11.02", "2025.11.14"]);
        assert_eq!(series[0].loss, Decimal::ZERO);
        assert_eq!(series[0].total, Decimal::ZERO);
    }

    #[test]
    fn offset_moves_trades_across_midnight() {
        let trades = vec![normalized(1, at(2025, 11, 12, 22), dec!(10))];
        let plus_three = DayBoundary::from_offset_minutes(180).unwrap();
        let series = TimeSeriesAggregator::new(plus_three).build_pnl_series(&trades);
        assert_eq!(series[0].day, "2025.11.13");
    }

    #[test]
    fn count_series_uses_raw_sign() {
        let mut converted = normalized(5, at(2025, 11, 13, 11), dec!(0));
        converted.raw_profit = dec!(-2);
        let trades = vec![
            normalized(1, at(2025, 11, 12, 8), dec!(0.01)),
            normalized(2, at(2025, 11, 12, 9), dec!(0)),
            normalized(3, at(2025, 11, 12, 10), dec!(-3000)),
            normalized(4, at(2025, 11, 13, 10), dec!(7)),
            converted,
        ];
        let series = TimeSeriesAggregator::new(DayBoundary::utc()).build_count_series(&trades);
        assert_eq!(
            series,
            vec![
                CountBucket { day: "2025.11.12".into(), profit: 1, loss: 2 },
                CountBucket { day: "2025.11.13".into(), profit: 1, loss: 1 },
            ]
        );
    }

    #[test]
    fn oversized_sums_pin_at_the_limit() {
        let big = Decimal::MAX / dec!(2) + Decimal::ONE;
        let trades = vec![
            normalized(1, at(2025, 11, 12, 8), big),
            normalized(2, at(2025, 11, 12, 9), big),
            normalized(3, at(2025, 11, 12, 10), -big),
            normalized(4, at(2025, 11, 12, 11), -big),
        ];
        let series = TimeSeriesAggregator::new(DayBoundary::utc()).build_pnl_series(&trades);
        assert_eq!(series[0].profit, Decimal::MAX);
        assert_eq!(series[0].loss, Decimal::MIN);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let aggregator = TimeSeriesAggregator::new(DayBoundary::utc());
        assert!(aggregator.build_pnl_series(&[]).is_empty());
        assert!(aggregator.build_count_series(&[]).is_empty());
    }

    fn arb_trades() -> impl Strategy<Value = Vec<NormalizedTrade>> {
        prop::collection::vec((0i64..60 * 86_400, -1_000_000i64..1_000_000), 0..40).prop_map(
            |raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, (offset, cents))| {
                        normalized(
                            i as u64,
                            at(2025, 1, 1, 0) + Duration::seconds(offset),
                            Decimal::new(cents, 2),
                        )
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn totals_sum_to_input_profit(trades in arb_trades()) {
            let series = TimeSeriesAggregator::new(DayBoundary::utc()).build_pnl_series(&trades);
            let bucket_sum: Decimal = series.iter().map(|b| b.total).sum();
            let input_sum: Decimal = trades.iter().map(|t| t.profit).sum();
            prop_assert_eq!(bucket_sum, input_sum);
            for bucket in &series {
                prop_assert_eq!(bucket.profit + bucket.loss, bucket.total);
                prop_assert!(bucket.loss <= Decimal::ZERO);
            }
        }

        #[test]
        fn series_ignore_input_order(trades in arb_trades(), seed in any::<u64>()) {
            let aggregator = TimeSeriesAggregator::new(DayBoundary::utc());
            let mut shuffled = trades.clone();
            // Deterministic rotation plus reversal stands in for a permutation.
            if !shuffled.is_empty() {
                let len = shuffled.len();
                shuffled.rotate_left((seed as usize) % len);
            }
            shuffled.reverse();

            prop_assert_eq!(
                aggregator.build_pnl_series(&trades),
                aggregator.build_pnl_series(&shuffled)
            );
            prop_assert_eq!(
                aggregator.build_count_series(&trades),
                aggregator.build_count_series(&shuffled)
            );
        }
    }
}
