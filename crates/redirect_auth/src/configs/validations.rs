use tracing_subscriber::EnvFilter;

use super::settings::{Gateway, Log};
use crate::{errors::ApplicationError, utils::when};

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
pub fn validate_return_url_scheme(scheme: &str) -> Result<(), ApplicationError> {
    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_is_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    when(!starts_with_letter || !rest_is_valid, || {
        Err(ApplicationError::InvalidConfigurationValueError(format!(
            "return url scheme `{scheme}` is not a valid url scheme"
        )))
    })
}

impl Gateway {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        when(self.base_url.is_empty(), || {
            Err(ApplicationError::InvalidConfigurationValueError(
                "gateway base url must not be empty".into(),
            ))
        })?;

        when(url::Url::parse(&self.base_url).is_err(), || {
            Err(ApplicationError::InvalidConfigurationValueError(format!(
                "gateway base url `{}` is not a valid url",
                self.base_url
            )))
        })?;

        when(self.timeout_secs == 0, || {
            Err(ApplicationError::InvalidConfigurationValueError(
                "gateway timeout must be greater than zero".into(),
            ))
        })
    }
}

impl Log {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        when(EnvFilter::try_new(&self.level).is_err(), || {
            Err(ApplicationError::InvalidConfigurationValueError(format!(
                "log level `{}` is not a valid filter directive",
                self.level
            )))
        })
    }
}
