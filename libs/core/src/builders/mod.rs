//! Per-provider request builders.
//!
//! Pure functions: dispatch on the credential variant, then on the message
//! kind, and emit a [`RequestDescriptor`]. No IO, no shared state; every
//! call is independent.

mod evolution;
mod official;
mod zapi;

use std::collections::BTreeMap;

use crate::content::MessageContent;
use crate::credentials::ProviderCredentials;
use crate::request::RequestDescriptor;

/// Builds the provider-specific request for one message.
///
/// The credential variant carries the provider, so the provider/intent
/// dispatch is exhaustive at compile time.
pub fn build_request(
    credentials: &ProviderCredentials,
    to: &str,
    content: &MessageContent,
) -> RequestDescriptor {
    match credentials {
        ProviderCredentials::Official(creds) => official::build(creds, to, content),
        ProviderCredentials::Zapi(creds) => zapi::build(creds, to, content),
        ProviderCredentials::Evolution(creds) => evolution::build(creds, to, content),
    }
}

fn json_headers(extra: &[(&str, String)]) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    for (name, value) in extra {
        headers.insert((*name).to_string(), value.clone());
    }
    headers
}
