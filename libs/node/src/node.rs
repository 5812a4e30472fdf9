use serde_json::{Value, json};
use thiserror::Error;
use wasend_core::{SendError, Transport, build_request};

use crate::item::SendItem;

/// Failure attributed to one input item. Aborts the batch when the host
/// runs without continue-on-fail.
#[derive(Debug, Error)]
#[error("item {index}: {source}")]
pub struct ItemError {
    pub index: usize,
    #[source]
    pub source: SendError,
}

/// The send node: sequential processing, one awaited transport call per
/// item, no shared state across items.
pub struct SendNode<T> {
    transport: T,
    continue_on_fail: bool,
}

impl<T: Transport> SendNode<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            continue_on_fail: false,
        }
    }

    /// Record per-item failures as `{error}` results instead of aborting
    /// the batch.
    pub fn continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Processes items in order. Item `i`'s send completes before item
    /// `i+1` starts; when a later item fails, earlier sends stay effected
    /// (message sends are not transactional).
    pub async fn run(&self, items: Vec<SendItem>) -> Result<Vec<Value>, ItemError> {
        let mut results = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match self.process(&item).await {
                Ok(record) => results.push(record),
                Err(source) if self.continue_on_fail => {
                    tracing::warn!(
                        target: "wasend.node",
                        index,
                        error = %source,
                        "item failed; continuing"
                    );
                    results.push(json!({ "error": source.to_string() }));
                }
                Err(source) => return Err(ItemError { index, source }),
            }
        }
        Ok(results)
    }

    async fn process(&self, item: &SendItem) -> Result<Value, SendError> {
        let config = item.config.as_ref().ok_or(SendError::MissingConfiguration)?;
        // Parameter resolution happens before the request leaves: a
        // malformed item produces zero network calls.
        let content = item.params.content()?;
        let request = build_request(&config.credentials, &item.params.phone_number, &content);
        tracing::debug!(
            target: "wasend.node",
            provider = %config.api_provider,
            kind = %content.kind(),
            to = %item.params.phone_number,
            "sending message"
        );
        let response = self.transport.send(&request).await?;

        let mut record = item.fields.clone();
        record.insert("messageResponse".to_string(), response);
        record.insert("sentTo".to_string(), json!(item.params.phone_number));
        record.insert("messageType".to_string(), json!(content.kind()));
        record.insert("apiProvider".to_string(), json!(config.api_provider));
        Ok(Value::Object(record))
    }
}
