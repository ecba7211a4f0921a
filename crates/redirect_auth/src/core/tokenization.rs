//! Turns a resolved redirect into a payment method nonce.

use error_stack::report;

use super::AuthorizationContext;
use crate::{
    errors::{AuthorizationError, CustomResult},
    logger,
    services::AnalyticsEvent,
    types::{
        AuthorizationOutcome, AuthorizationSession, FlowKind, PaymentCredential,
        PaymentMethodNonce,
    },
};

/// Only an authorized outcome yields a credential; the other outcomes map
/// straight to the caller facing failure.
pub fn to_credential(
    outcome: AuthorizationOutcome,
    session: &AuthorizationSession,
) -> CustomResult<PaymentCredential, AuthorizationError> {
    match outcome {
        AuthorizationOutcome::Authorized(url_response_data) => {
            Ok(PaymentCredential::new(session, url_response_data))
        }
        AuthorizationOutcome::Cancelled => Err(report!(AuthorizationError::UserCancelled {
            provider: session.flow.provider_name(),
        })),
        AuthorizationOutcome::Invalid(reason) => {
            Err(report!(AuthorizationError::InconsistentResponse {
                reason: reason.message().to_string(),
            }))
        }
    }
}

/// Checks that the nonce belongs to the family the flow produces.
pub fn ensure_expected_nonce(
    flow: FlowKind,
    nonce: &PaymentMethodNonce,
) -> Result<(), AuthorizationError> {
    match (flow, nonce) {
        (
            FlowKind::SinglePayment | FlowKind::BillingAgreement,
            PaymentMethodNonce::PayPalAccount(_),
        )
        | (FlowKind::LocalPayment, PaymentMethodNonce::LocalPayment(_)) => Ok(()),
        (
            FlowKind::SinglePayment | FlowKind::BillingAgreement | FlowKind::LocalPayment,
            PaymentMethodNonce::PayPalAccount(_)
            | PaymentMethodNonce::LocalPayment(_)
            | PaymentMethodNonce::Card(_),
        ) => Err(AuthorizationError::UnexpectedCredentialType {
            expected: PaymentMethodNonce::expected_label(flow),
            actual: nonce.type_label(),
        }),
    }
}

pub async fn tokenize(
    context: &AuthorizationContext,
    outcome: AuthorizationOutcome,
    session: &AuthorizationSession,
) -> CustomResult<PaymentMethodNonce, AuthorizationError> {
    let flow = session.flow;
    let credential = match to_credential(outcome, session) {
        Ok(credential) => credential,
        Err(error) => {
            let event = if error.current_context().is_cancellation() {
                AnalyticsEvent::BrowserSwitchCanceled(flow)
            } else {
                AnalyticsEvent::BrowserSwitchFailed(flow)
            };
            context.analytics.send_event(event);
            return Err(error);
        }
    };

    let nonce = context
        .tokenization
        .tokenize(&credential)
        .await
        .map_err(|error| {
            logger::error!(?error, %flow, "tokenization failed");
            context
                .analytics
                .send_event(AnalyticsEvent::BrowserSwitchFailed(flow));
            error.change_context(AuthorizationError::TransportError)
        })?;

    if let Err(error) = ensure_expected_nonce(flow, &nonce) {
        logger::error!(
            %flow,
            actual = nonce.type_label(),
            "tokenization returned an unexpected nonce type"
        );
        context
            .analytics
            .send_event(AnalyticsEvent::BrowserSwitchFailed(flow));
        return Err(report!(error));
    }
    context
        .analytics
        .send_event(AnalyticsEvent::BrowserSwitchSucceeded(flow));

    if let PaymentMethodNonce::PayPalAccount(account) = &nonce {
        if account.credit_financing.is_some() {
            context.analytics.send_event(AnalyticsEvent::CreditAccepted);
        }
    }

    Ok(nonce)
}
