use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::provider::ApiProvider;

/// Superset mapping of every provider's secret fields, as read from the
/// host's credential store. Values may be empty; validating their contents
/// is the remote API's job, surfaced as a transport error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CredentialBag(BTreeMap<String, String>);

impl CredentialBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for wiring and tests.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Field value, or the empty string when the store has no entry.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CredentialBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfficialCredentials {
    pub access_token: String,
    pub phone_number_id: String,
    pub business_account_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZapiCredentials {
    pub instance_id: String,
    pub token: String,
    pub client_token: String,
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionCredentials {
    pub base_url: String,
    pub api_key: String,
    pub instance_name: String,
}

/// Per-provider projection of the credential bag. One variant per backend
/// so request building can match exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ProviderCredentials {
    Official(OfficialCredentials),
    Zapi(ZapiCredentials),
    Evolution(EvolutionCredentials),
}

impl ProviderCredentials {
    /// Projects only the fields the given provider declares; another
    /// provider's secrets never cross this boundary.
    pub fn select(provider: ApiProvider, bag: &CredentialBag) -> Self {
        match provider {
            ApiProvider::Official => ProviderCredentials::Official(OfficialCredentials {
                access_token: bag.get("accessToken").to_string(),
                phone_number_id: bag.get("phoneNumberId").to_string(),
                business_account_id: bag.get("businessAccountId").to_string(),
            }),
            ApiProvider::Zapi => ProviderCredentials::Zapi(ZapiCredentials {
                instance_id: bag.get("instanceId").to_string(),
                token: bag.get("token").to_string(),
                client_token: bag.get("clientToken").to_string(),
                base_url: bag.get("baseUrl").to_string(),
            }),
            ApiProvider::Evolution => ProviderCredentials::Evolution(EvolutionCredentials {
                base_url: bag.get("baseUrl").to_string(),
                api_key: bag.get("apiKey").to_string(),
                instance_name: bag.get("instanceName").to_string(),
            }),
        }
    }

    pub fn provider(&self) -> ApiProvider {
        match self {
            ProviderCredentials::Official(_) => ApiProvider::Official,
            ProviderCredentials::Zapi(_) => ApiProvider::Zapi,
            ProviderCredentials::Evolution(_) => ApiProvider::Evolution,
        }
    }
}
