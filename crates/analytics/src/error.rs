use rust_decimal::Decimal;
use thiserror::Error;

/// Why a single trade could not be expressed in the reporting currency.
///
/// These are tolerated failures: the trade is skipped and the report goes on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Account {login} could not be resolved: {reason}")]
    AccountNotFound { login: u64, reason: String },

    #[error("Group '{0}' is not present in the group listing")]
    GroupNotFound(String),

    #[error("Group '{group}' has no usable currency (got '{currency}')")]
    UnknownCurrency { group: String, currency: String },

    #[error("No conversion rate from {from} to {to}: {reason}")]
    RateUnavailable {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Converting order {order} at rate {rate} overflows")]
    ConversionOverflow { order: u64, rate: Decimal },
}
