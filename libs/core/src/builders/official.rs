use serde_json::{Map, Value, json};

use super::json_headers;
use crate::content::{ListContent, MediaKind, MediaMessage, MessageContent};
use crate::credentials::OfficialCredentials;
use crate::request::RequestDescriptor;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v18.0";

pub(super) fn build(
    creds: &OfficialCredentials,
    to: &str,
    content: &MessageContent,
) -> RequestDescriptor {
    let url = format!("{GRAPH_API_BASE}/{}/messages", creds.phone_number_id);
    let headers = json_headers(&[(
        "Authorization",
        format!("Bearer {}", creds.access_token),
    )]);
    let body = match content {
        MessageContent::Text { message } => json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "text",
            "text": { "body": message },
        }),
        MessageContent::Media(media) => media_body(to, media),
        MessageContent::List(list) => list_body(to, list),
    };
    RequestDescriptor::post(url, headers, body)
}

fn media_body(to: &str, media: &MediaMessage) -> Value {
    let mut attachment = Map::new();
    attachment.insert("link".to_string(), json!(media.media_url));
    if let Some(caption) = media.caption() {
        attachment.insert("caption".to_string(), json!(caption));
    }
    if matches!(media.kind, MediaKind::Document) {
        if let Some(filename) = media.filename() {
            attachment.insert("filename".to_string(), json!(filename));
        }
    }

    let mut body = Map::new();
    body.insert("messaging_product".to_string(), json!("whatsapp"));
    body.insert("to".to_string(), json!(to));
    body.insert("type".to_string(), json!(media.kind.as_str()));
    body.insert(media.kind.as_str().to_string(), Value::Object(attachment));
    Value::Object(body)
}

fn list_body(to: &str, list: &ListContent) -> Value {
    let sections: Vec<Value> = list
        .sections
        .iter()
        .map(|section| {
            json!({
                "title": section.title,
                "rows": section
                    .rows
                    .iter()
                    .map(|row| {
                        json!({
                            "id": row.id,
                            "title": row.title,
                            "description": row.description.clone().unwrap_or_default(),
                        })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let mut interactive = Map::new();
    interactive.insert("type".to_string(), json!("list"));
    // The description takes the body slot; the title moves into the header
    // only when both carry text.
    if list.description().is_some() && !list.title.is_empty() {
        interactive.insert(
            "header".to_string(),
            json!({ "type": "text", "text": list.title }),
        );
    }
    interactive.insert(
        "body".to_string(),
        json!({ "text": list.description().unwrap_or(&list.title) }),
    );
    if let Some(footer) = list.footer() {
        interactive.insert("footer".to_string(), json!({ "text": footer }));
    }
    interactive.insert(
        "action".to_string(),
        json!({
            "button": list.button_text,
            "sections": sections,
        }),
    );

    json!({
        "messaging_product": "whatsapp",
        "to": to,
        "type": "interactive",
        "interactive": interactive,
    })
}
