use serde_json::{Map, Value, json};

use super::json_headers;
use crate::content::{MediaKind, MessageContent};
use crate::credentials::ZapiCredentials;
use crate::request::RequestDescriptor;

pub(super) fn build(
    creds: &ZapiCredentials,
    to: &str,
    content: &MessageContent,
) -> RequestDescriptor {
    let root = format!(
        "{}/instances/{}/token/{}",
        creds.base_url.trim_end_matches('/'),
        creds.instance_id,
        creds.token,
    );
    let headers = json_headers(&[("Client-Token", creds.client_token.clone())]);

    let (endpoint, body) = match content {
        MessageContent::Text { message } => (
            "send-text",
            json!({ "phone": to, "message": message }),
        ),
        MessageContent::Media(media) => {
            let mut body = Map::new();
            body.insert("phone".to_string(), json!(to));
            body.insert(media.kind.as_str().to_string(), json!(media.media_url));
            if let Some(caption) = media.caption() {
                body.insert("caption".to_string(), json!(caption));
            }
            (media_endpoint(media.kind), Value::Object(body))
        }
        MessageContent::List(list) => {
            // Z-API has no section or row-description concept; rows are
            // flattened across sections in order, lossy by design.
            let buttons: Vec<Value> = list
                .sections
                .iter()
                .flat_map(|section| &section.rows)
                .map(|row| json!({ "id": row.id, "label": row.title }))
                .collect();
            (
                "send-button-list",
                json!({
                    "phone": to,
                    "message": list.title,
                    "buttonList": { "buttons": buttons },
                }),
            )
        }
    };

    RequestDescriptor::post(format!("{root}/{endpoint}"), headers, body)
}

fn media_endpoint(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "send-image",
        MediaKind::Document => "send-document",
        MediaKind::Audio => "send-audio",
        MediaKind::Video => "send-video",
    }
}
