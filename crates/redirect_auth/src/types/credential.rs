use serde::{Deserialize, Serialize};

use crate::types::{AuthorizationSession, FlowKind, UrlResponseData};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ValidationOptions {
    pub validate: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    pub options: ValidationOptions,
    #[serde(flatten)]
    pub url_response_data: UrlResponseData,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CredentialMeta {
    pub source: String,
}

/// Tokenizable account built from an authorized redirect.
///
/// Serializes into the body the tokenization collaborator posts to the gateway.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PaymentCredential {
    #[serde(rename = "paypalAccount")]
    pub account: AccountDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account_id: Option<String>,
    #[serde(rename = "_meta")]
    pub meta: CredentialMeta,
}

impl PaymentCredential {
    pub fn new(session: &AuthorizationSession, url_response_data: UrlResponseData) -> Self {
        let payment_type = match session.flow {
            FlowKind::LocalPayment => session.payment_sub_type.clone(),
            FlowKind::SinglePayment | FlowKind::BillingAgreement => None,
        };
        Self {
            account: AccountDetails {
                correlation_id: session.client_metadata_id.clone(),
                intent: session.intent.clone(),
                payment_type,
                options: ValidationOptions { validate: false },
                url_response_data,
            },
            merchant_account_id: session.merchant_account_id.clone(),
            meta: CredentialMeta {
                source: session.source.clone(),
            },
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditFinancing {
    pub term: u32,
    pub monthly_payment: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPalAccountNonce {
    pub nonce: String,
    pub email: Option<String>,
    pub payer_id: Option<String>,
    pub credit_financing: Option<CreditFinancing>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPaymentNonce {
    pub nonce: String,
    pub payer_id: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardNonce {
    pub nonce: String,
    pub last_four: Option<String>,
}

/// Result of tokenization, one variant per payment family.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum PaymentMethodNonce {
    PayPalAccount(PayPalAccountNonce),
    LocalPayment(LocalPaymentNonce),
    #[serde(rename = "CreditCard")]
    Card(CardNonce),
}

impl PaymentMethodNonce {
    pub fn nonce(&self) -> &str {
        match self {
            Self::PayPalAccount(account) => &account.nonce,
            Self::LocalPayment(account) => &account.nonce,
            Self::Card(card) => &card.nonce,
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            Self::PayPalAccount(_) => "PayPalAccount",
            Self::LocalPayment(_) => "LocalPayment",
            Self::Card(_) => "CreditCard",
        }
    }

    /// Label of the nonce family a flow is expected to produce.
    pub fn expected_label(flow: FlowKind) -> &'static str {
        match flow {
            FlowKind::SinglePayment | FlowKind::BillingAgreement => "PayPalAccount",
            FlowKind::LocalPayment => "LocalPayment",
        }
    }
}
