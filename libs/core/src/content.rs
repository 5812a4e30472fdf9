use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::SendError;

/// Kind of outbound message, as selected on the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    Text,
    Image,
    Document,
    Audio,
    Video,
    ButtonList,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Image => "image",
            MessageKind::Document => "document",
            MessageKind::Audio => "audio",
            MessageKind::Video => "video",
            MessageKind::ButtonList => "buttonList",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media flavour of a message; everything except text and lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Document,
    Audio,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Document => "document",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }

    pub fn message_kind(&self) -> MessageKind {
        match self {
            MediaKind::Image => MessageKind::Image,
            MediaKind::Document => MessageKind::Document,
            MediaKind::Audio => MessageKind::Audio,
            MediaKind::Video => MessageKind::Video,
        }
    }

    /// Fixed mimetype the Evolution API expects per media kind.
    pub(crate) fn mimetype(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/png",
            MediaKind::Document => "application/pdf",
            MediaKind::Audio => "audio/mp3",
            MediaKind::Video => "video/mp4",
        }
    }

    /// Synthesized file name for providers that require one.
    pub(crate) fn default_filename(&self) -> &'static str {
        match self {
            MediaKind::Image => "file.png",
            MediaKind::Document => "document.pdf",
            MediaKind::Audio => "file.mp3",
            MediaKind::Video => "file.mp4",
        }
    }
}

/// Media message parameters shared by image, document, audio, and video.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaMessage {
    pub kind: MediaKind,
    pub media_url: String,
    pub caption: Option<String>,
    pub filename: Option<String>,
}

impl MediaMessage {
    /// Caption when present and non-empty; audio never carries one.
    pub(crate) fn caption(&self) -> Option<&str> {
        if matches!(self.kind, MediaKind::Audio) {
            return None;
        }
        self.caption.as_deref().filter(|c| !c.is_empty())
    }

    pub(crate) fn filename(&self) -> Option<&str> {
        self.filename.as_deref().filter(|f| !f.is_empty())
    }
}

/// One row of an interactive list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One titled section of an interactive list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListSection {
    pub title: String,
    #[serde(default)]
    pub rows: Vec<ListRow>,
}

/// Fully resolved interactive-list parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ListContent {
    pub title: String,
    pub button_text: String,
    pub sections: Vec<ListSection>,
    pub description: Option<String>,
    pub footer_text: Option<String>,
}

impl ListContent {
    /// Parses the host-supplied `listSections` JSON string. Fails with
    /// [`SendError::MalformedInput`] before any network activity.
    pub fn parse_sections(raw: &str) -> Result<Vec<ListSection>, SendError> {
        serde_json::from_str(raw)
            .map_err(|err| SendError::MalformedInput(format!("listSections is not valid JSON: {err}")))
    }

    pub(crate) fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub(crate) fn footer(&self) -> Option<&str> {
        self.footer_text.as_deref().filter(|f| !f.is_empty())
    }
}

/// Message payload after parameter resolution, independent of provider.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageContent {
    Text { message: String },
    Media(MediaMessage),
    List(ListContent),
}

impl MessageContent {
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageContent::Text { .. } => MessageKind::Text,
            MessageContent::Media(media) => media.kind.message_kind(),
            MessageContent::List(_) => MessageKind::ButtonList,
        }
    }
}
