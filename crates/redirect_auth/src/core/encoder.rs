//! Builds the gateway payload for an authorization request

use error_stack::{report, ResultExt};
use serde::Serialize;

use crate::{
    errors::{CustomResult, EncodeError},
    types::{AuthorizationRequest, PaymentIntent, PostalAddress},
};

/// The document posted to the gateway. Key order is stable, so identical requests
/// always render to identical bytes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EncodedPayload(serde_json::Map<String, serde_json::Value>);

impl EncodedPayload {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_value(self) -> serde_json::Value {
        serde_json::Value::Object(self.0)
    }

    pub fn to_json_string(&self) -> CustomResult<String, EncodeError> {
        serde_json::to_string(&self.0).change_context(EncodeError::SerializationFailed)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressFields<'a> {
    #[serde(rename = "line1", skip_serializing_if = "Option::is_none")]
    street_address: Option<&'a str>,
    #[serde(rename = "line2", skip_serializing_if = "Option::is_none")]
    extended_address: Option<&'a str>,
    #[serde(rename = "city", skip_serializing_if = "Option::is_none")]
    locality: Option<&'a str>,
    #[serde(rename = "state", skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<&'a str>,
}

impl<'a> From<&'a PostalAddress> for AddressFields<'a> {
    fn from(address: &'a PostalAddress) -> Self {
        Self {
            street_address: address.street_address.as_deref(),
            extended_address: address.extended_address.as_deref(),
            locality: address.locality.as_deref(),
            region: address.region.as_deref(),
            postal_code: address.postal_code.as_deref(),
            country_code: address.country_code_alpha2.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExperienceProfile<'a> {
    no_shipping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale_code: Option<&'a str>,
}

// `Option` fields without a skip attribute are part of the wire contract and go
// out as null when unset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RedirectPaymentRequest<'a> {
    intent: PaymentIntent,
    return_url: &'a str,
    cancel_url: &'a str,
    funding_source: Option<&'a str>,
    amount: Option<&'a str>,
    currency_iso_code: Option<&'a str>,
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
    payer_email: Option<&'a str>,
    phone: Option<&'a str>,
    merchant_account_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_type_country_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bic: Option<&'a str>,
    #[serde(flatten)]
    address: Option<AddressFields<'a>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    offer_paypal_credit: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    offer_pay_later: bool,
    experience_profile: ExperienceProfile<'a>,
}

impl<'a> RedirectPaymentRequest<'a> {
    fn new(request: &'a AuthorizationRequest, return_url: &'a str, cancel_url: &'a str) -> Self {
        Self {
            intent: request.intent.unwrap_or_default(),
            return_url,
            cancel_url,
            funding_source: request.payment_type.as_deref(),
            amount: request.amount.as_deref(),
            currency_iso_code: request.currency_code.as_deref(),
            first_name: request.given_name.as_deref(),
            last_name: request.surname.as_deref(),
            payer_email: request.email.as_deref(),
            phone: request.phone.as_deref(),
            merchant_account_id: request.merchant_account_id.as_deref(),
            payment_type_country_code: request.payment_type_country_code.as_deref(),
            bic: request.bic.as_deref(),
            address: request.address.as_ref().map(AddressFields::from),
            offer_paypal_credit: request.offer_credit,
            offer_pay_later: request.offer_pay_later,
            experience_profile: ExperienceProfile {
                no_shipping: !request.shipping_address_required,
                brand_name: request.display_name.as_deref(),
                locale_code: request.locale_code.as_deref(),
            },
        }
    }
}

/// Renders `request` together with the two callback urls into the gateway payload.
pub fn encode(
    request: &AuthorizationRequest,
    return_url: &str,
    cancel_url: &str,
) -> CustomResult<EncodedPayload, EncodeError> {
    if return_url.is_empty() {
        return Err(report!(EncodeError::MissingRequiredField {
            field_name: "return_url"
        }));
    }
    if cancel_url.is_empty() {
        return Err(report!(EncodeError::MissingRequiredField {
            field_name: "cancel_url"
        }));
    }

    let wire_request = RedirectPaymentRequest::new(request, return_url, cancel_url);
    match serde_json::to_value(&wire_request).change_context(EncodeError::SerializationFailed)? {
        serde_json::Value::Object(map) => Ok(EncodedPayload(map)),
        _ => Err(report!(EncodeError::SerializationFailed))
            .attach_printable("gateway payload did not serialize to a JSON object"),
    }
}
