use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::SendError;

/// Backend WhatsApp API targeted by a send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiProvider {
    /// Meta's official Business Cloud API.
    Official,
    /// Z-API hosted instances.
    Zapi,
    /// Evolution API (self-hosted Baileys wrapper).
    Evolution,
}

impl ApiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiProvider::Official => "official",
            ApiProvider::Zapi => "zapi",
            ApiProvider::Evolution => "evolution",
        }
    }

    /// Secret-store field names this provider reads. Credential projection
    /// never forwards a field outside this set.
    pub fn credential_fields(&self) -> &'static [&'static str] {
        match self {
            ApiProvider::Official => &["accessToken", "phoneNumberId", "businessAccountId"],
            ApiProvider::Zapi => &["instanceId", "token", "clientToken", "baseUrl"],
            ApiProvider::Evolution => &["baseUrl", "apiKey", "instanceName"],
        }
    }
}

impl fmt::Display for ApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiProvider {
    type Err = SendError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "official" => Ok(ApiProvider::Official),
            "zapi" => Ok(ApiProvider::Zapi),
            "evolution" => Ok(ApiProvider::Evolution),
            other => Err(SendError::UnknownProvider(other.to_string())),
        }
    }
}
