use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wasend_core::{ApiProvider, CredentialBag, ProviderCredentials, SendError};

/// Output of the provider configuration node, attached to every item
/// before it reaches the send node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub api_provider: ApiProvider,
    pub credentials: ProviderCredentials,
}

impl ProviderConfig {
    /// Resolves the raw provider identifier and projects the credential
    /// bag down to that provider's fields.
    ///
    /// An empty identifier is a precondition failure
    /// ([`SendError::MissingConfiguration`]); an identifier outside the
    /// closed set fails with [`SendError::UnknownProvider`]. Neither
    /// reaches the network.
    pub fn resolve(provider: &str, bag: &CredentialBag) -> Result<Self, SendError> {
        if provider.trim().is_empty() {
            return Err(SendError::MissingConfiguration);
        }
        let api_provider: ApiProvider = provider.parse()?;
        Ok(Self {
            api_provider,
            credentials: ProviderCredentials::select(api_provider, bag),
        })
    }
}
