use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Account {0} was not found")]
    AccountNotFound(u64),

    #[error("No conversion rate available for {from}/{to}")]
    RateUnavailable { from: String, to: String },

    #[error("Failed to read dataset '{path}': {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset: {0}")]
    DatasetFormat(#[from] serde_json::Error),

    #[error("The backend is unavailable: {0}")]
    Unavailable(String),
}
