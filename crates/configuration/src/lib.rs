use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, LoggingSettings, ReportSettings, ServerSettings};

/// Prefix of environment variables that override file settings, e.g.
/// `APP_REPORT__TOP_N=5` or `APP_SERVER__BIND_ADDR=127.0.0.1:8080`.
pub const ENV_PREFIX: &str = "APP";

/// Loads the application configuration from `report.toml` in the working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("report.toml"))
}

/// Loads and validates the configuration.
///
/// The file is optional; defaults fill anything it does not set, and
/// `APP_`-prefixed environment variables override both.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let mut config = builder.try_deserialize::<Config>()?;
    config.normalize();
    config.validate()?;

    tracing::debug!(path = %path.display(), ?config, "Loaded configuration.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config_from(Path::new("/no/such/report.toml")).unwrap();
        assert_eq!(config.report.reporting_currency, "USD");
        assert_eq!(config.report.top_n, 10);
        assert_eq!(config.report.lookback_days, 14);
        assert_eq!(config.report.modal_size, "xxxl");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[report]\ntop_n = 5\nutc_offset_minutes = 180\n\n[server]\ndataset_path = \"fixtures/day.json\""
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.report.top_n, 5);
        assert_eq!(config.report.utc_offset_minutes, Some(180));
        assert_eq!(config.report.reporting_currency, "USD");
        assert_eq!(config.server.dataset_path, "fixtures/day.json");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[report]\ntop_n = 0").unwrap();
        assert!(matches!(
            load_config_from(file.path()),
            Err(ConfigError::ValidationError(_))
        ));

        let mut config = Config::default();
        config.report.reporting_currency = "US DOLLAR".into();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.report.utc_offset_minutes = Some(15 * 60);
        assert!(config.validate().is_err());
    }

    #[test]
    fn reporting_currency_is_trimmed_and_uppercased() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[report]\nreporting_currency = \" eur \"").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.report.reporting_currency, "EUR");
    }
}
