use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, CONFIG_FILE_STEM, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub report: ReportConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub delimiter: String,
    pub header: bool,
}

impl ReportConfig {
    /// ## Summary
    /// Returns the delimiter as the single byte the CSV writer expects.
    ///
    /// ## Errors
    /// Returns an error unless the configured delimiter is exactly one ASCII character.
    pub fn delimiter_byte(&self) -> CoreResult<u8> {
        let mut chars = self.delimiter.chars();
        let byte = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => u8::try_from(c).ok(),
            _ => None,
        };
        byte.ok_or_else(|| {
            CoreError::InvalidConfiguration(format!(
                "report.delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Abort the run on the first input that cannot be read.
    pub strict: bool,
    /// Descend into hidden files and directories while walking inputs.
    pub hidden: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `birthdays.toml`.
    /// Values from the TOML file take precedence over environment variables.
    ///
    /// ## Errors
    /// Returns an error if building or deserializing the configuration fails.
    pub fn load() -> CoreResult<Self> {
        tracing::debug!(file = CONFIG_FILE_NAME, prefix = ENV_PREFIX, "Loading settings");
        Self::from_builder(
            Self::defaults()?
                .add_source(
                    config::Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .convert_case(config::Case::Snake)
                        .separator("_")
                        .ignore_empty(true)
                        .try_parsing(true),
                )
                .add_source(config::File::with_name(CONFIG_FILE_STEM).required(false)),
        )
    }

    fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("report.delimiter", ";")?
            .set_default("report.header", true)?
            .set_default("input.strict", false)?
            .set_default("input.hidden", false)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        Ok(builder.build()?.try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used. Run after
    /// command-line overrides are applied.
    ///
    /// ## Errors
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> CoreResult<()> {
        self.report.delimiter_byte()?;
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
