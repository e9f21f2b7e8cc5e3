use crate::{Clock, ControlTimeCalculator, Rounding};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub rounding: Rounding,
    #[serde(default)]
    pub clock: Clock,
}

impl Settings {
    /// Loads `config/{APP_ENVIRONMENT}.yml` (defaults to `local`) overlaid by
    /// `BREVET__*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
        let settings = Self::for_environment(&environment)?;

        info!(
            environment = %environment,
            rounding = settings.rounding.as_ref(),
            clock = settings.clock.as_ref(),
            "loaded brevet settings"
        );

        Ok(settings)
    }

    pub fn for_environment(environment: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("config/{}", environment.to_lowercase()))
                    .required(false),
            )
            .add_source(config::Environment::with_prefix("BREVET").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn calculator(&self) -> ControlTimeCalculator {
        ControlTimeCalculator::new(self.rounding).with_clock(self.clock)
    }
}
