use crate::{
    errors::{CustomResult, TransportError},
    types::{PaymentCredential, PaymentMethodNonce},
};

/// Exchanges an authorized account for a payment method nonce.
#[async_trait::async_trait]
pub trait TokenizationClient: Send + Sync {
    async fn tokenize(
        &self,
        credential: &PaymentCredential,
    ) -> CustomResult<PaymentMethodNonce, TransportError>;
}
