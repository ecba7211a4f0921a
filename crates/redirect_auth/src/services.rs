//! Collaborator seams of the handshake: gateway transport, remote configuration,
//! browser switch, tokenization and analytics.

pub mod analytics;
pub mod browser_switch;
pub mod configuration;
pub mod gateway;
pub mod tokenization;

pub use self::{
    analytics::{AnalyticsClient, AnalyticsEvent, LoggingAnalyticsClient},
    browser_switch::{
        BrowserSwitchClient, BrowserSwitchOptions, BrowserSwitchResult, BrowserSwitchStatus,
    },
    configuration::{Configuration, ConfigurationProvider},
    gateway::{GatewayClient, HttpGatewayClient},
    tokenization::TokenizationClient,
};
