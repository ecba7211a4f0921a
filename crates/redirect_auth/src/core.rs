//! The redirect authorization handshake: encoding, gating, initiation,
//! resolution and tokenization.

pub mod encoder;
pub mod gate;
pub mod initiator;
pub mod resolver;
pub mod tokenization;

use std::{fmt, sync::Arc};

use crate::{
    configs::settings::Settings,
    services::{
        AnalyticsClient, BrowserSwitchClient, ConfigurationProvider, GatewayClient,
        TokenizationClient,
    },
};

/// Immutable settings plus collaborator handles, shared by every handshake step.
#[derive(Clone)]
pub struct AuthorizationContext {
    pub settings: Arc<Settings>,
    pub gateway: Arc<dyn GatewayClient>,
    pub configuration_provider: Arc<dyn ConfigurationProvider>,
    pub browser_switch: Arc<dyn BrowserSwitchClient>,
    pub tokenization: Arc<dyn TokenizationClient>,
    pub analytics: Arc<dyn AnalyticsClient>,
}

impl fmt::Debug for AuthorizationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
