use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the reporting service.
///
/// Every section and field has a default, so an empty or missing
/// `report.toml` yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportSettings,
    pub logging: LoggingSettings,
    pub server: ServerSettings,
}

/// Parameters shaping the content of a report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Currency every profit is converted into (e.g., "USD").
    pub reporting_currency: String,
    /// How many trades each best/worst table shows.
    pub top_n: usize,
    /// How many days before the requested `from` the daily charts reach back.
    pub lookback_days: i64,
    /// Offset from UTC used to cut calendar days. Host local time when absent.
    pub utc_offset_minutes: Option<i32>,
    /// Size hint passed to the renderer's modal.
    pub modal_size: String,
    /// Title shown in the modal header.
    pub title: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            reporting_currency: "USD".to_string(),
            top_n: 10,
            lookback_days: 14,
            utc_offset_minutes: None,
            modal_size: "xxxl".to_string(),
            title: "Daily Trades report".to_string(),
        }
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs also go to a daily rolling file in this directory.
    pub directory: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// Settings for the hosts that serve reports.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
    /// JSON dataset backing the in-memory trading backend.
    pub dataset_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            dataset_path: "dataset.json".to_string(),
        }
    }
}

/// Largest UTC offset any real time zone uses, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

impl Config {
    /// Brings free-form values into the form the rest of the service compares
    /// against: the reporting currency is trimmed and upper-cased.
    pub fn normalize(&mut self) {
        let currency = self.report.reporting_currency.trim().to_ascii_uppercase();
        self.report.reporting_currency = currency;
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let report = &self.report;

        let currency = report.reporting_currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::ValidationError(format!(
                "reporting_currency must be a 3-letter code, got '{}'",
                report.reporting_currency
            )));
        }
        if report.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "top_n must be at least 1".to_string(),
            ));
        }
        if report.lookback_days < 0 {
            return Err(ConfigError::ValidationError(format!(
                "lookback_days cannot be negative, got {}",
                report.lookback_days
            )));
        }
        if let Some(offset) = report.utc_offset_minutes {
            if offset.abs() > MAX_OFFSET_MINUTES {
                return Err(ConfigError::ValidationError(format!(
                    "utc_offset_minutes must be within ±{MAX_OFFSET_MINUTES}, got {offset}"
                )));
            }
        }
        if report.modal_size.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "modal_size cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
