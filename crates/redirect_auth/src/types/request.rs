use serde::{Deserialize, Serialize};

use crate::{consts, errors::AuthorizationError, types::FlowKind};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentIntent {
    Authorize,
    #[default]
    Sale,
    Order,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PostalAddress {
    pub street_address: Option<String>,
    pub extended_address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code_alpha2: Option<String>,
}

/// Description of what is being authorized.
///
/// Whether `amount` is set decides the flow: single payment (and local payment)
/// requests carry an amount, billing agreements must not.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuthorizationRequest {
    pub intent: Option<PaymentIntent>,
    pub address: Option<PostalAddress>,
    pub amount: Option<String>,
    pub currency_code: Option<String>,
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub merchant_account_id: Option<String>,
    /// Funding source, e.g. `ideal` or `sofort` for local payments.
    pub payment_type: Option<String>,
    pub payment_type_country_code: Option<String>,
    /// Bank Identification Code, specific to iDEAL.
    pub bic: Option<String>,
    pub shipping_address_required: bool,
    pub offer_credit: bool,
    pub offer_pay_later: bool,
    pub display_name: Option<String>,
    pub locale_code: Option<String>,
}

impl AuthorizationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(mut self, intent: PaymentIntent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn address(mut self, address: PostalAddress) -> Self {
        self.address = Some(address);
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn merchant_account_id(mut self, merchant_account_id: impl Into<String>) -> Self {
        self.merchant_account_id = Some(merchant_account_id.into());
        self
    }

    pub fn payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.payment_type = Some(payment_type.into());
        self
    }

    /// Must be one of the supported country codes of the local payment type. For
    /// payment types offered in several countries it selects the banks shown.
    pub fn payment_type_country_code(
        mut self,
        payment_type_country_code: impl Into<String>,
    ) -> Self {
        self.payment_type_country_code = Some(payment_type_country_code.into());
        self
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    pub fn shipping_address_required(mut self, shipping_address_required: bool) -> Self {
        self.shipping_address_required = shipping_address_required;
        self
    }

    pub fn offer_credit(mut self, offer_credit: bool) -> Self {
        self.offer_credit = offer_credit;
        self
    }

    pub fn offer_pay_later(mut self, offer_pay_later: bool) -> Self {
        self.offer_pay_later = offer_pay_later;
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn locale_code(mut self, locale_code: impl Into<String>) -> Self {
        self.locale_code = Some(locale_code.into());
        self
    }

    /// Checks that the request may be started through the entry point of `flow`.
    pub fn validate_for_flow(&self, flow: FlowKind) -> Result<(), AuthorizationError> {
        let message = match flow {
            FlowKind::SinglePayment if self.amount.is_none() => {
                consts::SINGLE_PAYMENT_AMOUNT_REQUIRED_MESSAGE
            }
            FlowKind::BillingAgreement if self.amount.is_some() => {
                consts::BILLING_AGREEMENT_AMOUNT_FORBIDDEN_MESSAGE
            }
            FlowKind::LocalPayment if self.amount.is_none() || self.payment_type.is_none() => {
                consts::LOCAL_PAYMENT_FIELDS_REQUIRED_MESSAGE
            }
            FlowKind::SinglePayment | FlowKind::BillingAgreement | FlowKind::LocalPayment => {
                return Ok(())
            }
        };
        Err(AuthorizationError::InvalidRequestState {
            message: message.to_string(),
        })
    }
}
