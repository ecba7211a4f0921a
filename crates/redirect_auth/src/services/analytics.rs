use std::fmt;

use crate::{logger, types::FlowKind};

/// Diagnostic events emitted while driving a handshake.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalyticsEvent {
    Selected(FlowKind),
    CreditOffered(FlowKind),
    PayLaterOffered(FlowKind),
    ProviderDisabled(FlowKind),
    InvalidManifest(FlowKind),
    BrowserSwitchStarted(FlowKind),
    BrowserSwitchLaunchFailed(FlowKind),
    BrowserSwitchCanceled(FlowKind),
    BrowserSwitchSucceeded(FlowKind),
    BrowserSwitchFailed(FlowKind),
    CreditAccepted,
}

fn flow_prefix(flow: FlowKind) -> &'static str {
    match flow {
        FlowKind::SinglePayment => "paypal.single-payment",
        FlowKind::BillingAgreement => "paypal.billing-agreement",
        FlowKind::LocalPayment => "local-payment",
    }
}

fn family_prefix(flow: FlowKind) -> &'static str {
    match flow {
        FlowKind::SinglePayment | FlowKind::BillingAgreement => "paypal",
        FlowKind::LocalPayment => "local-payment",
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected(flow) => write!(f, "{}.selected", flow_prefix(*flow)),
            Self::CreditOffered(flow) => write!(f, "{}.credit.offered", flow_prefix(*flow)),
            Self::PayLaterOffered(flow) => write!(f, "{}.paylater.offered", flow_prefix(*flow)),
            Self::ProviderDisabled(flow) => write!(f, "{}.provider-disabled", family_prefix(*flow)),
            Self::InvalidManifest(flow) => write!(f, "{}.invalid-manifest", family_prefix(*flow)),
            Self::BrowserSwitchStarted(flow) => {
                write!(f, "{}.browser-switch.started", flow_prefix(*flow))
            }
            Self::BrowserSwitchLaunchFailed(flow) => {
                write!(f, "{}.browser-switch.launch-failed", flow_prefix(*flow))
            }
            Self::BrowserSwitchCanceled(flow) => {
                write!(f, "{}.browser-switch.canceled", flow_prefix(*flow))
            }
            Self::BrowserSwitchSucceeded(flow) => {
                write!(f, "{}.browser-switch.succeeded", flow_prefix(*flow))
            }
            Self::BrowserSwitchFailed(flow) => {
                write!(f, "{}.browser-switch.failed", flow_prefix(*flow))
            }
            Self::CreditAccepted => f.write_str("paypal.credit.accepted"),
        }
    }
}

/// Fire-and-forget analytics sink. Implementations must not block.
pub trait AnalyticsClient: Send + Sync {
    fn send_event(&self, event: AnalyticsEvent);
}

/// Sink that only records events in the log stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingAnalyticsClient;

impl AnalyticsClient for LoggingAnalyticsClient {
    fn send_event(&self, event: AnalyticsEvent) {
        logger::debug!(analytics_event = %event, "analytics event");
    }
}
