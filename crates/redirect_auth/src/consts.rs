//! Wire keys, metadata keys and fixed strings of the handshake

// Gateway request keys
pub const INTENT_KEY: &str = "intent";
pub const RETURN_URL_KEY: &str = "returnUrl";
pub const CANCEL_URL_KEY: &str = "cancelUrl";
pub const EXPERIENCE_PROFILE_KEY: &str = "experienceProfile";
pub const NO_SHIPPING_KEY: &str = "noShipping";
pub const FUNDING_SOURCE_KEY: &str = "fundingSource";
pub const AMOUNT_KEY: &str = "amount";
pub const CURRENCY_CODE_KEY: &str = "currencyIsoCode";
pub const GIVEN_NAME_KEY: &str = "firstName";
pub const SURNAME_KEY: &str = "lastName";
pub const EMAIL_KEY: &str = "payerEmail";
pub const PHONE_KEY: &str = "phone";
pub const MERCHANT_ACCOUNT_ID_KEY: &str = "merchantAccountId";
pub const PAYMENT_TYPE_COUNTRY_CODE_KEY: &str = "paymentTypeCountryCode";
pub const BIC_KEY: &str = "bic";

/// Keys every encoded payload carries, set or not.
pub const REQUIRED_PAYLOAD_KEYS: [&str; 12] = [
    INTENT_KEY,
    RETURN_URL_KEY,
    CANCEL_URL_KEY,
    FUNDING_SOURCE_KEY,
    AMOUNT_KEY,
    CURRENCY_CODE_KEY,
    GIVEN_NAME_KEY,
    SURNAME_KEY,
    EMAIL_KEY,
    PHONE_KEY,
    MERCHANT_ACCOUNT_ID_KEY,
    EXPERIENCE_PROFILE_KEY,
];

// Round-trip token keys
pub const TOKEN_KEY: &str = "token";
pub const BILLING_AGREEMENT_TOKEN_KEY: &str = "ba_token";

// Source tags recorded on the session and forwarded to tokenization
pub const PAYPAL_BROWSER_SOURCE: &str = "paypal-browser";
pub const LOCAL_PAYMENT_BROWSER_SOURCE: &str = "local-payment-browser";

pub const WEB_RESPONSE_TYPE: &str = "web";

// Gateway endpoints, relative to the configured base url
pub const CREATE_PAYMENT_RESOURCE_PATH: &str = "v1/paypal_hermes/create_payment_resource";
pub const SETUP_BILLING_AGREEMENT_PATH: &str = "v1/paypal_hermes/setup_billing_agreement";
pub const CREATE_LOCAL_PAYMENT_PATH: &str = "v1/local_payments/create";

// Return / cancel targets appended to the return url scheme
pub const PAYPAL_SUCCESS_PATH: &str = "onetouch/v1/success";
pub const PAYPAL_CANCEL_PATH: &str = "onetouch/v1/cancel";
pub const LOCAL_PAYMENT_SUCCESS_PATH: &str = "local-payment-success";
pub const LOCAL_PAYMENT_CANCEL_PATH: &str = "local-payment-cancel";

// Browser switch request codes
pub const PAYPAL_REQUEST_CODE: i32 = 13591;
pub const LOCAL_PAYMENT_REQUEST_CODE: i32 = 13596;

pub const PAYPAL_PROVIDER_NAME: &str = "PayPal";
pub const LOCAL_PAYMENT_PROVIDER_NAME: &str = "Local Payments";

// Invalid outcome reasons
pub const AUTHORIZATION_NOT_COMPLETED_MESSAGE: &str = "user did not complete authorization";
pub const INCONSISTENT_RESPONSE_MESSAGE: &str = "inconsistent response data";
pub const SESSION_METADATA_MISSING_MESSAGE: &str =
    "browser switch result carried no usable session metadata";
pub const STALE_SESSION_MESSAGE: &str =
    "browser switch result belongs to a session that is not pending";

pub const SINGLE_PAYMENT_AMOUNT_REQUIRED_MESSAGE: &str =
    "An amount must be specified for the Single Payment flow.";
pub const BILLING_AGREEMENT_AMOUNT_FORBIDDEN_MESSAGE: &str =
    "There must be no amount specified for the Billing Agreement flow";
pub const LOCAL_PAYMENT_FIELDS_REQUIRED_MESSAGE: &str =
    "LocalPaymentRequest is invalid, paymentType and amount are required.";

/// Resolved sessions remembered per client to reject repeated returns.
pub const CONSUMED_SESSION_HISTORY: usize = 16;

pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;
