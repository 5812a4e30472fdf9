use thiserror::Error;

/// Error taxonomy for the send layer.
///
/// Everything except `Transport` is raised synchronously, before any
/// network activity. Nothing here is retried; retry policy belongs to an
/// outer orchestration layer, not to this crate.
#[derive(Debug, Error)]
pub enum SendError {
    /// The upstream provider configuration object is absent or names no
    /// provider.
    #[error("no provider configuration found; run the provider config node first")]
    MissingConfiguration,
    /// Provider identifier outside the closed `official|zapi|evolution` set.
    #[error("unknown api provider `{0}`")]
    UnknownProvider(String),
    /// A structured parameter failed local parsing.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Non-2xx response or network failure, surfaced opaquely from the
    /// transport.
    #[error("transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
}

impl SendError {
    pub(crate) fn bad_status(status: u16, body: String) -> Self {
        SendError::Transport {
            status: Some(status),
            message: format!("status={status} body={body}"),
        }
    }

    pub(crate) fn network(err: reqwest::Error) -> Self {
        SendError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    /// True when the failure happened before any request left the process.
    pub fn is_local(&self) -> bool {
        !matches!(self, SendError::Transport { .. })
    }
}
