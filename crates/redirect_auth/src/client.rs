//! Caller facing entry points.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use error_stack::{report, ResultExt};

use crate::{
    configs::settings::Settings,
    consts,
    core::{initiator, resolver, tokenization, AuthorizationContext},
    errors::{AuthorizationError, CustomResult},
    logger,
    services::{
        AnalyticsClient, BrowserSwitchClient, BrowserSwitchResult, BrowserSwitchStatus,
        ConfigurationProvider, GatewayClient, LoggingAnalyticsClient, TokenizationClient,
    },
    types::{AuthorizationRequest, AuthorizationSession, FlowKind, PaymentMethodNonce},
};

/// Drives PayPal and local payment authorizations through the browser switch.
///
/// A client owns at most one pending session at a time. Starting another flow
/// while one is pending fails with [`AuthorizationError::SessionInProgress`].
#[derive(Debug)]
pub struct RedirectAuthClient {
    context: AuthorizationContext,
    sessions: Mutex<SessionSlots>,
}

/// Session bookkeeping, sessions are identified by their approval url.
///
/// Never held across an await.
#[derive(Debug, Default)]
struct SessionSlots {
    /// A flow is between validation and browser launch.
    initiating: bool,
    /// Handed to the browser switch and not yet resolved.
    pending: Option<String>,
    /// Most recently resolved sessions, oldest first.
    consumed: VecDeque<String>,
}

impl SessionSlots {
    fn is_busy(&self) -> bool {
        self.initiating || self.pending.is_some()
    }

    fn remember_consumed(&mut self, approval_url: String) {
        if self.consumed.len() >= consts::CONSUMED_SESSION_HISTORY {
            self.consumed.pop_front();
        }
        self.consumed.push_back(approval_url);
    }

    /// Marks `approval_url` as resolved. Fails when it was resolved before or
    /// another session is pending.
    fn consume(&mut self, approval_url: &str) -> Result<(), AuthorizationError> {
        let already_consumed = self
            .consumed
            .iter()
            .any(|consumed| consumed == approval_url);
        let other_pending = self
            .pending
            .as_deref()
            .is_some_and(|pending| pending != approval_url);
        if already_consumed || other_pending {
            return Err(AuthorizationError::InconsistentResponse {
                reason: consts::STALE_SESSION_MESSAGE.to_string(),
            });
        }

        self.pending = None;
        self.remember_consumed(approval_url.to_string());
        Ok(())
    }

    /// Resolves whatever is pending without a session to compare against.
    fn abandon_pending(&mut self) -> Option<String> {
        let abandoned = self.pending.take();
        if let Some(approval_url) = &abandoned {
            self.remember_consumed(approval_url.clone());
        }
        abandoned
    }
}

/// Clears the initiating marker however `initiate` ends, dropped future included.
struct InitiationGuard<'a> {
    sessions: &'a Mutex<SessionSlots>,
}

impl Drop for InitiationGuard<'_> {
    fn drop(&mut self) {
        lock(self.sessions).initiating = false;
    }
}

fn lock(sessions: &Mutex<SessionSlots>) -> MutexGuard<'_, SessionSlots> {
    // The slots stay consistent between statements, so a poisoned lock is still usable.
    sessions.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RedirectAuthClient {
    pub fn new(
        settings: Arc<Settings>,
        gateway: Arc<dyn GatewayClient>,
        configuration_provider: Arc<dyn ConfigurationProvider>,
        browser_switch: Arc<dyn BrowserSwitchClient>,
        tokenization: Arc<dyn TokenizationClient>,
    ) -> Self {
        Self::from_context(AuthorizationContext {
            settings,
            gateway,
            configuration_provider,
            browser_switch,
            tokenization,
            analytics: Arc::new(LoggingAnalyticsClient),
        })
    }

    pub fn from_context(context: AuthorizationContext) -> Self {
        Self {
            context,
            sessions: Mutex::default(),
        }
    }

    pub fn with_analytics(mut self, analytics: Arc<dyn AnalyticsClient>) -> Self {
        self.context.analytics = analytics;
        self
    }

    pub fn context(&self) -> &AuthorizationContext {
        &self.context
    }

    /// Starts the PayPal single payment flow. `request` must carry an amount.
    pub async fn request_one_time_payment(
        &self,
        request: &AuthorizationRequest,
    ) -> CustomResult<AuthorizationSession, AuthorizationError> {
        self.request_authorization(request, FlowKind::SinglePayment)
            .await
    }

    /// Starts the PayPal billing agreement flow. `request` must not carry an amount.
    pub async fn request_billing_agreement(
        &self,
        request: &AuthorizationRequest,
    ) -> CustomResult<AuthorizationSession, AuthorizationError> {
        self.request_authorization(request, FlowKind::BillingAgreement)
            .await
    }

    /// Starts a local (bank redirect) payment. `request` needs an amount and a payment type.
    pub async fn start_local_payment(
        &self,
        request: &AuthorizationRequest,
    ) -> CustomResult<AuthorizationSession, AuthorizationError> {
        self.request_authorization(request, FlowKind::LocalPayment)
            .await
    }

    /// Returns once the browser has been asked to open the approval page; the
    /// result of the authorization is delivered to [`Self::on_browser_switch_result`].
    pub async fn request_authorization(
        &self,
        request: &AuthorizationRequest,
        flow: FlowKind,
    ) -> CustomResult<AuthorizationSession, AuthorizationError> {
        let guard = {
            let mut sessions = lock(&self.sessions);
            if sessions.is_busy() {
                logger::warn!(%flow, "rejecting a new authorization while another one is pending");
                return Err(report!(AuthorizationError::SessionInProgress));
            }
            sessions.initiating = true;
            InitiationGuard {
                sessions: &self.sessions,
            }
        };

        let session = initiator::initiate(&self.context, request, flow).await?;
        lock(&self.sessions).pending = Some(session.approval_url.clone());
        drop(guard);
        Ok(session)
    }

    /// Consumes the result of a browser switch and tokenizes the authorized account.
    #[logger::instrument(skip_all, fields(request_code = result.request_code))]
    pub async fn on_browser_switch_result(
        &self,
        result: BrowserSwitchResult,
    ) -> CustomResult<PaymentMethodNonce, AuthorizationError> {
        let session = match self.parse_session(&result) {
            Ok(session) => session,
            Err(error) if result.status == BrowserSwitchStatus::Canceled => {
                logger::info!(?error, "canceled browser switch carried no session");
                if lock(&self.sessions).abandon_pending().is_some() {
                    logger::info!("released the pending session of the canceled browser switch");
                }
                return Err(report!(AuthorizationError::UserCancelled {
                    provider: provider_for_request_code(result.request_code),
                }));
            }
            Err(error) => return Err(error),
        };

        let consumed = lock(&self.sessions).consume(&session.approval_url);
        if let Err(error) = consumed {
            logger::warn!(
                flow = %session.flow,
                "browser switch result does not belong to a pending session"
            );
            return Err(report!(error));
        }

        let outcome = resolver::resolve(result.status, result.returned_url.as_deref(), &session);
        tokenization::tokenize(&self.context, outcome, &session).await
    }

    pub fn has_pending_session(&self) -> bool {
        lock(&self.sessions).pending.is_some()
    }

    /// Forgets a session the user never came back from, returning its approval url.
    /// A later result for that session is rejected.
    ///
    /// Only local bookkeeping: nothing is cancelled on the gateway.
    pub fn discard_pending_session(&self) -> Option<String> {
        let discarded = lock(&self.sessions).abandon_pending();
        if discarded.is_some() {
            logger::info!("discarded the pending authorization session");
        }
        discarded
    }

    fn parse_session(
        &self,
        result: &BrowserSwitchResult,
    ) -> CustomResult<AuthorizationSession, AuthorizationError> {
        let metadata = result.request_metadata.clone().ok_or_else(|| {
            report!(AuthorizationError::InconsistentResponse {
                reason: consts::SESSION_METADATA_MISSING_MESSAGE.to_string(),
            })
        })?;

        AuthorizationSession::from_metadata(metadata).change_context(
            AuthorizationError::InconsistentResponse {
                reason: consts::SESSION_METADATA_MISSING_MESSAGE.to_string(),
            },
        )
    }
}

fn provider_for_request_code(request_code: i32) -> &'static str {
    if request_code == consts::LOCAL_PAYMENT_REQUEST_CODE {
        consts::LOCAL_PAYMENT_PROVIDER_NAME
    } else {
        consts::PAYPAL_PROVIDER_NAME
    }
}
