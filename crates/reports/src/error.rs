use thiserror::Error;
use ui_tree::TableError;

/// Failures that abort a report.
///
/// Backend failures never appear here: a missing record or record set is
/// logged and left out, and the report is still produced.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report table is inconsistent: {0}")]
    Table(#[from] TableError),
}
