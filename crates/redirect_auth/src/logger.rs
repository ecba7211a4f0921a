//! Logging facade. Call sites use `logger::info!` and friends; the subscriber is
//! installed once by the embedding application through [`setup`].

pub use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    configs::settings::{Log, LogFormat},
    errors::ApplicationError,
};

/// Installs the global subscriber. Fails instead of panicking when one is already set.
pub fn setup(config: &Log) -> Result<(), ApplicationError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|error| ApplicationError::LoggerSetupError(error.to_string()))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.format {
        LogFormat::Default => subscriber.try_init(),
        LogFormat::Json => subscriber.json().try_init(),
    }
    .map_err(|error| ApplicationError::LoggerSetupError(error.to_string()))
}
