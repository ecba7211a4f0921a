use serde::{Deserialize, Serialize};

use crate::errors::{BrowserSwitchError, CustomResult};

/// Everything the platform needs to open the approval page and to hand the
/// session back when the user returns.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserSwitchOptions {
    pub request_code: i32,
    pub url: url::Url,
    pub return_url_scheme: String,
    /// Opaque to the platform; stored durably and returned untouched.
    pub metadata: serde_json::Value,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserSwitchStatus {
    Success,
    Canceled,
}

/// Delivered by the platform when control comes back from the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserSwitchResult {
    pub status: BrowserSwitchStatus,
    pub request_code: i32,
    pub returned_url: Option<String>,
    pub request_metadata: Option<serde_json::Value>,
}

impl BrowserSwitchResult {
    pub fn success(
        request_code: i32,
        returned_url: impl Into<String>,
        request_metadata: serde_json::Value,
    ) -> Self {
        Self {
            status: BrowserSwitchStatus::Success,
            request_code,
            returned_url: Some(returned_url.into()),
            request_metadata: Some(request_metadata),
        }
    }

    pub fn canceled(request_code: i32, request_metadata: Option<serde_json::Value>) -> Self {
        Self {
            status: BrowserSwitchStatus::Canceled,
            request_code,
            returned_url: None,
            request_metadata,
        }
    }
}

/// Platform redirect mechanism.
#[async_trait::async_trait]
pub trait BrowserSwitchClient: Send + Sync {
    /// Whether the app is the registered handler of `scheme` and nobody else claims it.
    fn is_return_url_scheme_registered(&self, scheme: &str) -> bool;

    async fn start(&self, options: BrowserSwitchOptions) -> CustomResult<(), BrowserSwitchError>;
}
