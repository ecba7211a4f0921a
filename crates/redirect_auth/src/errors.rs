//! Errors raised across the redirect authorization handshake

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Errors surfaced to the caller of the handshake.
///
/// Every variant carries a stable code (see [`AuthorizationError::error_code`]) so
/// callers can discriminate failures without matching on messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    /// The request does not fit the chosen entry point (amount vs flow).
    #[error("{message}")]
    InvalidRequestState { message: String },
    #[error(
        "{provider} is not enabled. See https://developer.paypal.com/braintree/docs/guides/paypal/overview \
         for more information."
    )]
    ProviderDisabled { provider: &'static str },
    #[error(
        "The return url scheme `{scheme}` is missing, incorrectly registered or claimed by another \
         application. Register it as the browser switch return target."
    )]
    RedirectMisconfigured { scheme: String },
    #[error("Failed to communicate with the payment gateway")]
    TransportError,
    /// The user backed out of the web authorization. Not a failure of the flow.
    #[error("User canceled {provider}")]
    UserCancelled { provider: &'static str },
    #[error("Authorization response rejected: {reason}")]
    InconsistentResponse { reason: String },
    /// The gateway session exists but the browser could not be opened; it is orphaned.
    #[error("Failed to launch the browser switch for the authorization session")]
    LaunchFailure,
    #[error("Another authorization session is still pending on this client")]
    SessionInProgress,
    #[error("Failed to encode the authorization request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize the gateway response")]
    ResponseDeserializationFailed,
    #[error(
        "Tokenization returned a {actual} credential where a {expected} credential was expected"
    )]
    UnexpectedCredentialType {
        expected: &'static str,
        actual: &'static str,
    },
}

impl AuthorizationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequestState { .. } => "RA_01",
            Self::ProviderDisabled { .. } => "RA_02",
            Self::RedirectMisconfigured { .. } => "RA_03",
            Self::TransportError => "RA_04",
            Self::UserCancelled { .. } => "RA_05",
            Self::InconsistentResponse { .. } => "RA_06",
            Self::LaunchFailure => "RA_07",
            Self::SessionInProgress => "RA_08",
            Self::RequestEncodingFailed => "RA_09",
            Self::ResponseDeserializationFailed => "RA_10",
            Self::UnexpectedCredentialType { .. } => "RA_11",
        }
    }

    /// Cancellation is a normal terminal outcome, reported through the error channel.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::UserCancelled { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Failed to serialize the request payload")]
    SerializationFailed,
}

/// Failures reported by the gateway, configuration and tokenization collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build the request for {url}")]
    RequestBuildingFailed { url: String },
    #[error("Failed to send the request")]
    RequestSendFailed,
    #[error("Gateway responded with unexpected status {status_code}")]
    UnexpectedStatus { status_code: u16 },
    #[error("Failed to read the response body")]
    ResponseReadFailed,
    #[error("{message}")]
    Collaborator { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserSwitchError {
    #[error("No activity is able to open {url}")]
    NoActivityFound { url: String },
    #[error("The return url scheme is not registered")]
    ReturnUrlSchemeNotRegistered,
    #[error("{message}")]
    Platform { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    #[error("Failed to parse {type_name}")]
    StructParseFailure { type_name: &'static str },
    #[error("Failed to parse url {url}")]
    UrlParseFailure { url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Application configuration error: {0}")]
    ConfigurationError(#[from] config::ConfigError),
    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),
    #[error("Failed to install the log subscriber: {0}")]
    LoggerSetupError(String),
}
