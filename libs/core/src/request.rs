use std::collections::BTreeMap;

use http::Method;
use serde_json::Value;

/// Fully resolved outbound HTTP request, ready for the transport.
///
/// Built once per send and consumed immediately; never retained.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl RequestDescriptor {
    pub fn post(url: impl Into<String>, headers: BTreeMap<String, String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body,
        }
    }
}
