use std::path::PathBuf;

use config::{Environment, File, FileFormat};
use secrecy::SecretBox;
use serde::Deserialize;

use crate::{errors::ApplicationError, logger};

const ENV_PREFIX: &str = "REDIRECT_AUTH";

/// Client side settings, loaded once and shared immutably by every component.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scheme the platform routes back to the app, e.g. `com.example.app.payments`.
    pub return_url_scheme: String,
    pub gateway: Gateway,
    pub log: Log,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Gateway {
    /// Merchant client api root, e.g. `https://api.braintreegateway.com/merchants/<id>/client_api/`.
    pub base_url: String,
    pub authorization_fingerprint: SecretBox<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Any directive accepted by `tracing_subscriber::EnvFilter`.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Default,
    Json,
}

impl Settings {
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config_path(None)
    }

    /// Layers, lowest priority first: built-in defaults, the optional TOML file,
    /// `REDIRECT_AUTH__*` environment variables.
    pub fn with_config_path(config_path: Option<PathBuf>) -> Result<Self, ApplicationError> {
        let mut builder = config::Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        let settings: Self = config.try_deserialize().map_err(|error| {
            logger::error!(?error, "unable to deserialize application configuration");
            ApplicationError::ConfigurationError(error)
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ApplicationError> {
        let settings: Self = config::Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        super::validations::validate_return_url_scheme(&self.return_url_scheme)?;
        self.gateway.validate()?;
        self.log.validate()
    }
}
