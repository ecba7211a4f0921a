#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use error_stack::report;
use redirect_auth::{
    configs::settings::Settings,
    core::{encoder::EncodedPayload, AuthorizationContext},
    errors::{BrowserSwitchError, CustomResult, TransportError},
    services::{
        AnalyticsClient, AnalyticsEvent, BrowserSwitchClient, BrowserSwitchOptions,
        Configuration, ConfigurationProvider, GatewayClient, TokenizationClient,
    },
    types::{PayPalAccountNonce, PaymentCredential, PaymentMethodNonce},
    RedirectAuthClient,
};
use serde_json::{json, Value};

pub const RETURN_URL_SCHEME: &str = "com.example.app.payments";

#[derive(Debug, Default)]
pub struct MockGateway {
    pub response: Mutex<Option<Value>>,
    pub calls: Mutex<Vec<(String, EncodedPayload)>>,
    /// When set, every post waits for a notification before answering.
    pub hold: Option<Arc<Notify>>,
}

impl MockGateway {
    pub fn responding(response: Value) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            calls: Mutex::default(),
            hold: None,
        }
    }

    pub fn held(response: Value, hold: Arc<Notify>) -> Self {
        Self {
            hold: Some(hold),
            ..Self::responding(response)
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl GatewayClient for MockGateway {
    async fn post(
        &self,
        path: &str,
        payload: &EncodedPayload,
    ) -> CustomResult<Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), payload.clone()));
        if let Some(hold) = &self.hold {
            hold.notified().await;
        }
        self.response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| report!(TransportError::UnexpectedStatus { status_code: 500 }))
    }
}

#[derive(Debug)]
pub struct MockConfigurationProvider {
    pub configuration: Option<Configuration>,
    pub fail: bool,
}

impl MockConfigurationProvider {
    pub fn all_enabled() -> Self {
        Self {
            configuration: Some(Configuration {
                paypal_enabled: true,
                local_payments_enabled: true,
                environment: Some("sandbox".to_string()),
            }),
            fail: false,
        }
    }

    pub fn with(configuration: Option<Configuration>) -> Self {
        Self {
            configuration,
            fail: false,
        }
    }
}

#[async_trait::async_trait]
impl ConfigurationProvider for MockConfigurationProvider {
    async fn get_configuration(&self) -> CustomResult<Option<Configuration>, TransportError> {
        if self.fail {
            return Err(report!(TransportError::RequestSendFailed));
        }
        Ok(self.configuration.clone())
    }
}

#[derive(Debug)]
pub struct MockBrowserSwitch {
    pub registered: bool,
    pub fail_start: bool,
    pub started: Mutex<Vec<BrowserSwitchOptions>>,
}

impl MockBrowserSwitch {
    pub fn registered() -> Self {
        Self {
            registered: true,
            fail_start: false,
            started: Mutex::default(),
        }
    }

    pub fn last_started(&self) -> BrowserSwitchOptions {
        self.started
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("browser switch was never started")
    }
}

#[async_trait::async_trait]
impl BrowserSwitchClient for MockBrowserSwitch {
    fn is_return_url_scheme_registered(&self, scheme: &str) -> bool {
        self.registered && scheme == RETURN_URL_SCHEME
    }

    async fn start(&self, options: BrowserSwitchOptions) -> CustomResult<(), BrowserSwitchError> {
        if self.fail_start {
            return Err(report!(BrowserSwitchError::NoActivityFound {
                url: options.url.to_string(),
            }));
        }
        self.started.lock().unwrap().push(options);
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockTokenization {
    pub nonce: Option<PaymentMethodNonce>,
    pub credentials: Mutex<Vec<Value>>,
}

impl MockTokenization {
    pub fn returning(nonce: PaymentMethodNonce) -> Self {
        Self {
            nonce: Some(nonce),
            credentials: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            nonce: None,
            credentials: Mutex::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.credentials.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TokenizationClient for MockTokenization {
    async fn tokenize(
        &self,
        credential: &PaymentCredential,
    ) -> CustomResult<PaymentMethodNonce, TransportError> {
        self.credentials
            .lock()
            .unwrap()
            .push(serde_json::to_value(credential).unwrap());
        self.nonce
            .clone()
            .ok_or_else(|| report!(TransportError::UnexpectedStatus { status_code: 422 }))
    }
}

#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    pub events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl AnalyticsClient for RecordingAnalytics {
    fn send_event(&self, event: AnalyticsEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn paypal_nonce() -> PaymentMethodNonce {
    PaymentMethodNonce::PayPalAccount(PayPalAccountNonce {
        nonce: "fake-paypal-account-nonce".to_string(),
        email: Some("payer@example.com".to_string()),
        payer_id: Some("PAYER-1".to_string()),
        credit_financing: None,
    })
}

pub fn single_payment_response() -> Value {
    json!({
        "approvalUrl": "https://x/a?token=T1",
        "successUrl": "https://x/success",
        "correlationId": "T1",
    })
}

pub fn settings() -> Settings {
    Settings {
        return_url_scheme: RETURN_URL_SCHEME.to_string(),
        ..Default::default()
    }
}

/// Handles kept by a test to inspect what the client did.
pub struct Harness {
    pub client: RedirectAuthClient,
    pub gateway: Arc<MockGateway>,
    pub browser_switch: Arc<MockBrowserSwitch>,
    pub tokenization: Arc<MockTokenization>,
    pub analytics: Arc<RecordingAnalytics>,
}

pub fn harness(
    gateway: MockGateway,
    configuration_provider: MockConfigurationProvider,
    browser_switch: MockBrowserSwitch,
    tokenization: MockTokenization,
) -> Harness {
    let gateway = Arc::new(gateway);
    let browser_switch = Arc::new(browser_switch);
    let tokenization = Arc::new(tokenization);
    let analytics = Arc::new(RecordingAnalytics::default());

    let client = RedirectAuthClient::from_context(AuthorizationContext {
        settings: Arc::new(settings()),
        gateway: gateway.clone(),
        configuration_provider: Arc::new(configuration_provider),
        browser_switch: browser_switch.clone(),
        tokenization: tokenization.clone(),
        analytics: analytics.clone(),
    });

    Harness {
        client,
        gateway,
        browser_switch,
        tokenization,
        analytics,
    }
}

pub fn default_harness() -> Harness {
    harness(
        MockGateway::responding(single_payment_response()),
        MockConfigurationProvider::all_enabled(),
        MockBrowserSwitch::registered(),
        MockTokenization::returning(paypal_nonce()),
    )
}
