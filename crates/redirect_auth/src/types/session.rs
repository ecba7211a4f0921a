use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

use crate::{
    consts,
    errors::{CustomResult, ParsingError},
    types::FlowKind,
};

/// State that bridges the redirect suspension.
///
/// Serialized into the browser switch metadata slot when the redirect starts and
/// parsed back, exactly once, when it returns.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuthorizationSession {
    pub approval_url: String,
    pub success_url: String,
    #[serde(rename = "payment-type")]
    pub flow: FlowKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_metadata_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub source: String,
}

impl AuthorizationSession {
    pub fn to_metadata(&self) -> CustomResult<serde_json::Value, ParsingError> {
        serde_json::to_value(self).change_context(ParsingError::StructParseFailure {
            type_name: "AuthorizationSession",
        })
    }

    pub fn from_metadata(metadata: serde_json::Value) -> CustomResult<Self, ParsingError> {
        serde_json::from_value(metadata).change_context(ParsingError::StructParseFailure {
            type_name: "AuthorizationSession",
        })
    }

    pub fn token_key(&self) -> &'static str {
        self.flow.token_key()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClientEnvironment {
    pub environment: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WebResponse {
    #[serde(rename = "webURL")]
    pub web_url: String,
}

/// Normalized envelope handed to tokenization, identical for every flow.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UrlResponseData {
    pub client: ClientEnvironment,
    pub response: WebResponse,
    pub response_type: String,
}

impl UrlResponseData {
    pub fn from_web_url(web_url: impl Into<String>) -> Self {
        Self {
            client: ClientEnvironment::default(),
            response: WebResponse {
                web_url: web_url.into(),
            },
            response_type: consts::WEB_RESPONSE_TYPE.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidReason {
    /// The returned url does not point at the success target.
    AuthorizationNotCompleted,
    /// The round-trip token is missing or differs from the one sent.
    InconsistentResponseData,
}

impl InvalidReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::AuthorizationNotCompleted => consts::AUTHORIZATION_NOT_COMPLETED_MESSAGE,
            Self::InconsistentResponseData => consts::INCONSISTENT_RESPONSE_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthorizationOutcome {
    Cancelled,
    Authorized(UrlResponseData),
    Invalid(InvalidReason),
}
