use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub principal: PrincipalConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrincipalConfig {
    /// First path segment of every principal URI (e.g. "principals").
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Email substituted for participants without one; ATTENDEE requires a
    /// calendar address.
    pub fallback_attendee_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml`. Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("principal.prefix", constants::PRINCIPAL_PREFIX_COMPONENT)?
            .set_default(
                "calendar.fallback_attendee_email",
                constants::FALLBACK_ATTENDEE_EMAIL,
            )?
            .set_default("logging.level", "debug")?
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks the invariants the backends rely on: a non-empty, slash-free
    /// principal prefix and a non-empty fallback email.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` when a value cannot be used.
    pub fn validate(&self) -> CoreResult<()> {
        if self.principal.prefix.is_empty() || self.principal.prefix.contains('/') {
            return Err(CoreError::InvalidConfiguration(format!(
                "principal prefix must be a single path segment, got '{}'",
                self.principal.prefix
            )));
        }
        if self.calendar.fallback_attendee_email.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "fallback attendee email must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            principal: PrincipalConfig {
                prefix: constants::PRINCIPAL_PREFIX_COMPONENT.to_string(),
            },
            calendar: CalendarConfig {
                fallback_attendee_email: constants::FALLBACK_ATTENDEE_EMAIL.to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
