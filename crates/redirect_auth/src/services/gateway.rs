use std::time::Duration;

use error_stack::{report, ResultExt};
use secrecy::{ExposeSecret, SecretBox};

use crate::{
    configs::settings,
    core::encoder::EncodedPayload,
    errors::{CustomResult, TransportError},
    logger,
};

/// Transport used to reach the payment gateway.
#[async_trait::async_trait]
pub trait GatewayClient: Send + Sync {
    /// Posts `payload` to `path` (relative to the gateway base url) and returns
    /// the decoded JSON body of a successful response.
    async fn post(
        &self,
        path: &str,
        payload: &EncodedPayload,
    ) -> CustomResult<serde_json::Value, TransportError>;
}

#[derive(Debug)]
pub struct HttpGatewayClient {
    client: reqwest::Client,
    base_url: url::Url,
    authorization_fingerprint: SecretBox<String>,
}

impl HttpGatewayClient {
    pub fn new(gateway: &settings::Gateway) -> CustomResult<Self, TransportError> {
        let mut base_url = gateway.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = url::Url::parse(&base_url).change_context(
            TransportError::RequestBuildingFailed {
                url: gateway.base_url.clone(),
            },
        )?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(gateway.timeout_secs))
            .build()
            .change_context(TransportError::RequestBuildingFailed {
                url: gateway.base_url.clone(),
            })
            .attach_printable("Failed to construct the http client")?;

        Ok(Self {
            client,
            base_url,
            authorization_fingerprint: SecretBox::new(Box::new(
                gateway.authorization_fingerprint.expose_secret().clone(),
            )),
        })
    }
}

#[async_trait::async_trait]
impl GatewayClient for HttpGatewayClient {
    async fn post(
        &self,
        path: &str,
        payload: &EncodedPayload,
    ) -> CustomResult<serde_json::Value, TransportError> {
        let url = self
            .base_url
            .join(path)
            .change_context(TransportError::RequestBuildingFailed {
                url: format!("{}{path}", self.base_url),
            })?;
        logger::debug!(%url, "posting payload to gateway");

        let response = self
            .client
            .post(url.clone())
            .bearer_auth(self.authorization_fingerprint.expose_secret())
            .json(payload)
            .send()
            .await
            .change_context(TransportError::RequestSendFailed)
            .attach_printable_lazy(|| format!("POST {url}"))?;

        let status = response.status();
        if !status.is_success() {
            logger::warn!(%url, status_code = status.as_u16(), "gateway rejected the request");
            return Err(report!(TransportError::UnexpectedStatus {
                status_code: status.as_u16(),
            }));
        }

        response
            .json::<serde_json::Value>()
            .await
            .change_context(TransportError::ResponseReadFailed)
    }
}
