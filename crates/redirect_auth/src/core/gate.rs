//! Decides whether an authorization flow may start at all.

use error_stack::report;

use crate::{
    errors::{AuthorizationError, CustomResult},
    logger,
    services::{AnalyticsClient, AnalyticsEvent, BrowserSwitchClient, Configuration},
    types::FlowKind,
};

/// A missing configuration counts as a disabled provider.
pub fn can_proceed(
    configuration: Option<&Configuration>,
    flow: FlowKind,
) -> Result<(), AuthorizationError> {
    match configuration {
        Some(configuration) if configuration.is_enabled_for(flow) => Ok(()),
        Some(_) | None => Err(AuthorizationError::ProviderDisabled {
            provider: flow.provider_name(),
        }),
    }
}

pub fn redirect_target_registered(
    browser_switch: &dyn BrowserSwitchClient,
    return_url_scheme: &str,
) -> bool {
    browser_switch.is_return_url_scheme_registered(return_url_scheme)
}

/// Runs both checks; the gateway is not contacted unless this returns `Ok`.
pub fn ensure_can_proceed(
    configuration: Option<&Configuration>,
    flow: FlowKind,
    browser_switch: &dyn BrowserSwitchClient,
    return_url_scheme: &str,
    analytics: &dyn AnalyticsClient,
) -> CustomResult<(), AuthorizationError> {
    if let Err(error) = can_proceed(configuration, flow) {
        logger::warn!(%flow, "payment provider is disabled for this merchant");
        analytics.send_event(AnalyticsEvent::ProviderDisabled(flow));
        return Err(report!(error));
    }

    if !redirect_target_registered(browser_switch, return_url_scheme) {
        logger::warn!(%flow, return_url_scheme, "browser switch return target is not registered");
        analytics.send_event(AnalyticsEvent::InvalidManifest(flow));
        return Err(report!(AuthorizationError::RedirectMisconfigured {
            scheme: return_url_scheme.to_string(),
        }));
    }

    Ok(())
}
