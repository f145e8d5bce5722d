//! # UI Tree
//!
//! A generic, declarative description of a report's charts and tables, and the
//! fixed JSON wire format a remote renderer consumes.
//!
//! ## Architectural Principles
//!
//! - **Closed node kinds, open properties:** a node is a `NodeKind` tag plus an
//!   ordered property list and ordered children. Which properties a kind expects is
//!   a convention between report code and the renderer; the tree does not check it.
//! - **Immutable once built:** nodes are plain values. A parent takes ownership of
//!   its children; nothing is shared or mutated afterwards.
//! - **Order in, order out:** serialization mirrors construction order exactly and
//!   never reorders or deduplicates properties or children.
//! - **Tables go through a builder:** `TableBuilder::build` is the single place where
//!   row/column consistency is checked before a descriptor can become a node.
//!
//! ## Public API
//!
//! - `UiNode`, `NodeKind`, `Props`, `PropValue`: the tree model.
//! - `elements`: one constructor per node kind.
//! - `serializer`: JSON encoding of a node.
//! - `ReportEnvelope`: the `ui.modal` wrapper around a report.
//! - `TableBuilder`, `TableDescriptor`: validated table descriptors.

pub mod elements;
pub mod envelope;
pub mod error;
pub mod node;
pub mod serializer;
pub mod table;

pub use envelope::{DEFAULT_MODAL_SIZE, ReportEnvelope};
pub use error::{TableError, UiError};
pub use node::{NodeKind, PropValue, Props, UiNode};
pub use table::{ColumnSpec, SortDirection, TableBuilder, TableDescriptor, TableRow};
