use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SendError;
use crate::request::RequestDescriptor;

/// Effectful boundary of the send layer: executes a fully built request
/// and returns the provider's JSON response unmodified.
///
/// Timeouts and TLS policy belong to the implementation; this layer
/// defines no retry or backoff of its own.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<Value, SendError>;
}

/// Transport backed by a shared [`reqwest::Client`].
#[derive(Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<Value, SendError> {
        let mut builder = self.http.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        tracing::debug!(target: "wasend.transport", url = %request.url, "dispatching request");
        let response = builder
            .json(&request.body)
            .send()
            .await
            .map_err(SendError::network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                target: "wasend.transport",
                status = status.as_u16(),
                "provider rejected request"
            );
            return Err(SendError::bad_status(status.as_u16(), body));
        }

        response.json().await.map_err(SendError::network)
    }
}
