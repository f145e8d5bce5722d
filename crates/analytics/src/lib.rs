//! # Report Analytics
//!
//! Pure aggregation logic for the daily trades report. Raw backend records go in,
//! plain aggregates come out: daily profit/loss buckets, daily trade counts,
//! bounded top-N rankings and the open-position profit/loss distribution.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This crate has no knowledge of the trading backend or of the
//!   UI tree. It depends only on `core-types` (Layer 0). Backend capabilities it needs
//!   (account lookup, conversion rates) are passed in as closures.
//! - **Skip, don't abort:** Normalisation reports a per-record `Result`. A trade whose
//!   account, group or rate cannot be resolved is left out of every aggregate and the
//!   reason is logged; the remaining trades are still processed.
//! - **One rounding policy:** Every value that ends up as text or as a percentage goes
//!   through the helpers in [`format`].
//!
//! ## Public API
//!
//! - `CurrencyNormalizer`: converts trade profit into the reporting currency.
//! - `TimeSeriesAggregator`: builds `DailyBucket` and `CountBucket` series.
//! - `RankingSelector`: top-N best and worst trades.
//! - `DistributionCalculator`: Profit/Loss percentage slices.
//! - `NormalizeError`: why a trade was skipped.

pub mod distribution;
pub mod error;
pub mod format;
pub mod normalizer;
pub mod ranking;
pub mod series;

pub use distribution::{DistributionCalculator, DistributionSlice, PoolKind};
pub use error::NormalizeError;
pub use normalizer::{CurrencyNormalizer, NormalizationOutcome, NormalizedTrade, SkippedTrade};
pub use ranking::{DEFAULT_TOP_N, RankedTrade, RankingSelector};
pub use series::{CountBucket, DailyBucket, DayBoundary, TimeSeriesAggregator};
