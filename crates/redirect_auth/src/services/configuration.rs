use serde::Deserialize;

use crate::{
    errors::{CustomResult, TransportError},
    types::FlowKind,
};

/// Merchant configuration as served by the gateway.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub paypal_enabled: bool,
    #[serde(default)]
    pub local_payments_enabled: bool,
    pub environment: Option<String>,
}

impl Configuration {
    pub fn is_enabled_for(&self, flow: FlowKind) -> bool {
        match flow {
            FlowKind::SinglePayment | FlowKind::BillingAgreement => self.paypal_enabled,
            FlowKind::LocalPayment => self.local_payments_enabled,
        }
    }
}

#[async_trait::async_trait]
pub trait ConfigurationProvider: Send + Sync {
    /// `Ok(None)` when the gateway has no configuration for this client.
    async fn get_configuration(&self) -> CustomResult<Option<Configuration>, TransportError>;
}
