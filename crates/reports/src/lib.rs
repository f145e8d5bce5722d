//! # Reports
//!
//! Turns backend records into a finished report document. This is the only crate
//! that knows about all the others: it fetches from a `TradingBackend`, runs the
//! `analytics` calculations and lays the results out as a `ui-tree` envelope.
//!
//! Generation is split in two steps. [`DailyTradesReport::collect`] talks to the
//! backend and produces plain aggregates; [`DailyTradesReport::render`] turns those
//! aggregates into nodes without any further I/O.

pub mod about;
pub mod charts;
pub mod daily;
pub mod error;
pub mod layout;
pub mod request;
pub mod tables;

pub use about::ReportInfo;
pub use daily::{DailyTradesReport, ReportData};
pub use error::ReportError;
pub use request::ReportRequest;
