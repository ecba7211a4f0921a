pub mod credential;
pub mod request;
pub mod session;

use serde::{Deserialize, Serialize};

use crate::consts;

pub use self::{
    credential::{
        CardNonce, LocalPaymentNonce, PayPalAccountNonce, PaymentCredential, PaymentMethodNonce,
    },
    request::{AuthorizationRequest, PaymentIntent, PostalAddress},
    session::{AuthorizationOutcome, AuthorizationSession, InvalidReason, UrlResponseData},
};

/// Which payment family governs field, key and endpoint choices.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FlowKind {
    SinglePayment,
    BillingAgreement,
    LocalPayment,
}

impl FlowKind {
    /// Query parameter carrying the round-trip token in approval and returned urls.
    pub fn token_key(self) -> &'static str {
        match self {
            Self::BillingAgreement => consts::BILLING_AGREEMENT_TOKEN_KEY,
            Self::SinglePayment | Self::LocalPayment => consts::TOKEN_KEY,
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Self::SinglePayment | Self::BillingAgreement => consts::PAYPAL_BROWSER_SOURCE,
            Self::LocalPayment => consts::LOCAL_PAYMENT_BROWSER_SOURCE,
        }
    }

    pub fn provider_name(self) -> &'static str {
        match self {
            Self::SinglePayment | Self::BillingAgreement => consts::PAYPAL_PROVIDER_NAME,
            Self::LocalPayment => consts::LOCAL_PAYMENT_PROVIDER_NAME,
        }
    }

    pub fn gateway_path(self) -> &'static str {
        match self {
            Self::SinglePayment => consts::CREATE_PAYMENT_RESOURCE_PATH,
            Self::BillingAgreement => consts::SETUP_BILLING_AGREEMENT_PATH,
            Self::LocalPayment => consts::CREATE_LOCAL_PAYMENT_PATH,
        }
    }

    pub fn request_code(self) -> i32 {
        match self {
            Self::SinglePayment | Self::BillingAgreement => consts::PAYPAL_REQUEST_CODE,
            Self::LocalPayment => consts::LOCAL_PAYMENT_REQUEST_CODE,
        }
    }

    /// `(return_url, cancel_url)` handed to the gateway for this flow.
    pub fn callback_urls(self, return_url_scheme: &str) -> (String, String) {
        let (success, cancel) = match self {
            Self::SinglePayment | Self::BillingAgreement => {
                (consts::PAYPAL_SUCCESS_PATH, consts::PAYPAL_CANCEL_PATH)
            }
            Self::LocalPayment => (
                consts::LOCAL_PAYMENT_SUCCESS_PATH,
                consts::LOCAL_PAYMENT_CANCEL_PATH,
            ),
        };
        (
            format!("{return_url_scheme}://{success}"),
            format!("{return_url_scheme}://{cancel}"),
        )
    }
}
