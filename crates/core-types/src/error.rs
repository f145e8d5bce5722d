use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
