use serde_json::json;

use super::json_headers;
use crate::content::MessageContent;
use crate::credentials::EvolutionCredentials;
use crate::request::RequestDescriptor;

pub(super) fn build(
    creds: &EvolutionCredentials,
    to: &str,
    content: &MessageContent,
) -> RequestDescriptor {
    let base = creds.base_url.trim_end_matches('/');
    let headers = json_headers(&[("apikey", creds.api_key.clone())]);

    let (endpoint, body) = match content {
        MessageContent::Text { message } => (
            "sendText",
            json!({ "number": to, "text": message }),
        ),
        MessageContent::Media(media) => (
            "sendMedia",
            json!({
                "number": to,
                "mediatype": media.kind.as_str(),
                "mimetype": media.kind.mimetype(),
                "media": media.media_url,
                "caption": media.caption().unwrap_or(""),
                "fileName": media.filename().unwrap_or(media.kind.default_filename()),
            }),
        ),
        MessageContent::List(list) => (
            "sendList",
            json!({
                "number": to,
                "title": list.title,
                "description": list.description().unwrap_or(&list.title),
                "buttonText": list.button_text,
                "footerText": list.footer().unwrap_or(""),
                "values": list
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
                                        "title": row.title,
                                        "description": row.description.clone().unwrap_or_default(),
                                        "rowId": row.id,
                                    })
                                })
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect::<Vec<_>>(),
            }),
        ),
    };

    RequestDescriptor::post(
        format!("{base}/message/{endpoint}/{}", creds.instance_name),
        headers,
        body,
    )
}
