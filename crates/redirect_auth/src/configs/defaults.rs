use secrecy::SecretBox;

use super::settings::{Gateway, Log, LogFormat};
use crate::consts;

impl Default for Gateway {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            authorization_fingerprint: SecretBox::new(Box::default()),
            timeout_secs: consts::DEFAULT_GATEWAY_TIMEOUT_SECS,
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}
