#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//! Client side redirect authorization for PayPal one-time payments, PayPal
//! billing agreements and local (bank redirect) payments.
//!
//! A flow is started through [`client::RedirectAuthClient`], which asks the
//! gateway for a provider hosted approval page and opens it through the
//! browser switch. Once the browser returns, the result is handed back to
//! [`client::RedirectAuthClient::on_browser_switch_result`], validated against
//! the pending session and exchanged for a payment method nonce.

pub mod client;
pub mod configs;
pub mod consts;
pub mod core;
pub mod errors;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

pub use self::{
    client::RedirectAuthClient,
    errors::{AuthorizationError, CustomResult},
};
