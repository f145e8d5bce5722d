//! # Core Types
//!
//! Layer 0 of the reporting workspace. These are the records supplied by the
//! trading backend for a single report request, plus the small value types the
//! other crates share. Nothing here knows about aggregation or rendering.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::TradeSide;
pub use error::CoreError;
pub use structs::{AccountRecord, GroupRecord, TimeWindow, TradeRecord};
