use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wasend_core::{
    ListContent, MediaKind, MediaMessage, MessageContent, MessageKind, SendError,
};

use crate::config::ProviderConfig;

/// Parameters the host resolved for one item.
///
/// Required fields for the selected message type are the host's concern;
/// anything missing passes through as an empty string and is rejected by
/// the remote API. The one locally validated field is `list_sections`,
/// which arrives as a raw JSON string and must parse before any send.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendParams {
    /// Digits only, with country code, no symbols.
    pub phone_number: String,
    pub message_type: MessageKind,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub list_title: Option<String>,
    #[serde(default)]
    pub list_description: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub footer_text: Option<String>,
    /// Raw JSON string of `[{title, rows: [{id, title, description?}]}]`.
    #[serde(default)]
    pub list_sections: Option<String>,
}

impl SendParams {
    pub fn text(phone_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            message_type: MessageKind::Text,
            message: Some(message.into()),
            media_url: None,
            caption: None,
            filename: None,
            list_title: None,
            list_description: None,
            button_text: None,
            footer_text: None,
            list_sections: None,
        }
    }

    /// Resolves the intent parameters into provider-independent content.
    /// Fails synchronously on a malformed `list_sections` string.
    pub fn content(&self) -> Result<MessageContent, SendError> {
        match self.message_type {
            MessageKind::Text => Ok(MessageContent::Text {
                message: self.message.clone().unwrap_or_default(),
            }),
            MessageKind::Image => Ok(self.media(MediaKind::Image)),
            MessageKind::Document => Ok(self.media(MediaKind::Document)),
            MessageKind::Audio => Ok(self.media(MediaKind::Audio)),
            MessageKind::Video => Ok(self.media(MediaKind::Video)),
            MessageKind::ButtonList => {
                let raw = self.list_sections.as_deref().unwrap_or_default();
                let sections = ListContent::parse_sections(raw)?;
                Ok(MessageContent::List(ListContent {
                    title: self.list_title.clone().unwrap_or_default(),
                    button_text: self.button_text.clone().unwrap_or_default(),
                    sections,
                    description: self.list_description.clone(),
                    footer_text: self.footer_text.clone(),
                }))
            }
        }
    }

    fn media(&self, kind: MediaKind) -> MessageContent {
        MessageContent::Media(MediaMessage {
            kind,
            media_url: self.media_url.clone().unwrap_or_default(),
            caption: self.caption.clone(),
            filename: self.filename.clone(),
        })
    }
}

/// One input item: the original fields the host passed through, the
/// resolved parameters, and the upstream provider configuration.
#[derive(Clone, Debug)]
pub struct SendItem {
    /// Original item fields, echoed into the result record.
    pub fields: Map<String, Value>,
    pub params: SendParams,
    /// Output of the provider config node; `None` when the config node
    /// never ran for this item.
    pub config: Option<ProviderConfig>,
}

impl SendItem {
    pub fn new(params: SendParams, config: ProviderConfig) -> Self {
        Self {
            fields: Map::new(),
            params,
            config: Some(config),
        }
    }
}
