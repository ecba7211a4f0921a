//! Obtains a provider hosted approval page and hands control to the browser switch.

use error_stack::{Report, ResultExt};
use serde::Deserialize;

use super::{encoder, gate, AuthorizationContext};
use crate::{
    errors::{AuthorizationError, CustomResult},
    logger,
    services::{AnalyticsEvent, BrowserSwitchOptions},
    types::{AuthorizationRequest, AuthorizationSession, FlowKind},
};

/// What the gateway answers when a payment resource is created.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayAuthorizationResponse {
    pub approval_url: String,
    pub success_url: String,
    pub correlation_id: Option<String>,
    pub merchant_account_id: Option<String>,
    pub intent: Option<String>,
}

fn emit_selection_events(
    context: &AuthorizationContext,
    request: &AuthorizationRequest,
    flow: FlowKind,
) {
    context.analytics.send_event(AnalyticsEvent::Selected(flow));
    match flow {
        FlowKind::SinglePayment => {
            if request.offer_credit {
                context.analytics.send_event(AnalyticsEvent::CreditOffered(flow));
            }
            if request.offer_pay_later {
                context.analytics.send_event(AnalyticsEvent::PayLaterOffered(flow));
            }
        }
        FlowKind::BillingAgreement => {
            if request.offer_credit {
                context.analytics.send_event(AnalyticsEvent::CreditOffered(flow));
            }
        }
        FlowKind::LocalPayment => {}
    }
}

fn build_session(
    request: &AuthorizationRequest,
    flow: FlowKind,
    response: GatewayAuthorizationResponse,
) -> AuthorizationSession {
    let payment_sub_type = match flow {
        FlowKind::LocalPayment => request.payment_type.clone(),
        FlowKind::SinglePayment | FlowKind::BillingAgreement => None,
    };
    AuthorizationSession {
        approval_url: response.approval_url,
        success_url: response.success_url,
        flow,
        client_metadata_id: response.correlation_id,
        merchant_account_id: response
            .merchant_account_id
            .or_else(|| request.merchant_account_id.clone()),
        payment_sub_type,
        intent: response
            .intent
            .or_else(|| request.intent.map(|intent| intent.to_string())),
        source: flow.source().to_string(),
    }
}

/// Starts the browser switch for a session the gateway already created.
///
/// Any failure here leaves that gateway session orphaned, so it is reported as
/// [`AuthorizationError::LaunchFailure`].
async fn launch(
    context: &AuthorizationContext,
    session: &AuthorizationSession,
) -> CustomResult<(), AuthorizationError> {
    let url = url::Url::parse(&session.approval_url)
        .change_context(AuthorizationError::LaunchFailure)
        .attach_printable("gateway returned an approval url that cannot be parsed")?;
    let metadata = session
        .to_metadata()
        .change_context(AuthorizationError::LaunchFailure)?;

    context
        .analytics
        .send_event(AnalyticsEvent::BrowserSwitchStarted(session.flow));

    context
        .browser_switch
        .start(BrowserSwitchOptions {
            request_code: session.flow.request_code(),
            url,
            return_url_scheme: context.settings.return_url_scheme.clone(),
            metadata,
        })
        .await
        .map_err(|error| {
            logger::error!(?error, flow = %session.flow, "failed to launch the browser switch");
            context
                .analytics
                .send_event(AnalyticsEvent::BrowserSwitchLaunchFailed(session.flow));
            error.change_context(AuthorizationError::LaunchFailure)
        })
}

/// Validates, gates and creates an authorization session, then starts the redirect.
///
/// The outcome of the redirect itself arrives later through the resolver.
#[logger::instrument(skip_all, fields(flow = %flow))]
pub async fn initiate(
    context: &AuthorizationContext,
    request: &AuthorizationRequest,
    flow: FlowKind,
) -> CustomResult<AuthorizationSession, AuthorizationError> {
    request.validate_for_flow(flow).map_err(Report::new)?;
    emit_selection_events(context, request, flow);

    let configuration = context
        .configuration_provider
        .get_configuration()
        .await
        .change_context(AuthorizationError::TransportError)
        .attach_printable("Failed to fetch the merchant configuration")?;
    gate::ensure_can_proceed(
        configuration.as_ref(),
        flow,
        context.browser_switch.as_ref(),
        &context.settings.return_url_scheme,
        context.analytics.as_ref(),
    )?;

    let (return_url, cancel_url) = flow.callback_urls(&context.settings.return_url_scheme);
    let payload = encoder::encode(request, &return_url, &cancel_url)
        .change_context(AuthorizationError::RequestEncodingFailed)?;

    let response = context
        .gateway
        .post(flow.gateway_path(), &payload)
        .await
        .change_context(AuthorizationError::TransportError)?;
    let response: GatewayAuthorizationResponse = serde_json::from_value(response)
        .change_context(AuthorizationError::ResponseDeserializationFailed)
        .attach_printable("Failed to parse GatewayAuthorizationResponse")?;

    let session = build_session(request, flow, response);
    logger::info!(
        client_metadata_id = ?session.client_metadata_id,
        "authorization session created"
    );

    launch(context, &session).await?;
    Ok(session)
}
