use serde_json::json;
use wasend_core::{
    ApiProvider, CredentialBag, ListContent, ListRow, ListSection, MediaKind, MediaMessage,
    MessageContent, ProviderCredentials, build_request,
};

fn creds() -> ProviderCredentials {
    let bag = CredentialBag::new()
        .with("accessToken", "T")
        .with("phoneNumberId", "123")
        .with("businessAccountId", "456");
    ProviderCredentials::select(ApiProvider::Official, &bag)
}

fn sample_list(description: Option<&str>, footer: Option<&str>) -> ListContent {
    ListContent {
        title: "Menu".into(),
        button_text: "Open".into(),
        sections: vec![
            ListSection {
                title: "Fruit".into(),
                rows: vec![
                    ListRow {
                        id: "r1".into(),
                        title: "Apple".into(),
                        description: Some("Green".into()),
                    },
                    ListRow {
                        id: "r2".into(),
                        title: "Banana".into(),
                        description: None,
                    },
                ],
            },
            ListSection {
                title: "Veg".into(),
                rows: vec![ListRow {
                    id: "r3".into(),
                    title: "Carrot".into(),
                    description: None,
                }],
            },
        ],
        description: description.map(Into::into),
        footer_text: footer.map(Into::into),
    }
}

#[test]
fn text_message_end_to_end() {
    let request = build_request(
        &creds(),
        "5511999999999",
        &MessageContent::Text { message: "hi".into() },
    );

    assert_eq!(request.method, http::Method::POST);
    assert_eq!(request.url, "https://graph.facebook.com/v18.0/123/messages");
    assert_eq!(request.headers.get("Authorization").unwrap(), "Bearer T");
    assert_eq!(
        request.headers.get("Content-Type").unwrap(),
        "application/json"
    );
    assert_eq!(
        request.body,
        json!({
            "messaging_product": "whatsapp",
            "to": "5511999999999",
            "type": "text",
            "text": { "body": "hi" },
        })
    );
}

#[test]
fn text_body_is_not_rewritten() {
    let message = "multi\nline \"quoted\" & <tagged>";
    let request = build_request(
        &creds(),
        "1",
        &MessageContent::Text { message: message.into() },
    );
    assert_eq!(request.body["text"]["body"], json!(message));
}

#[test]
fn image_nests_attachment_under_intent_name() {
    let request = build_request(
        &creds(),
        "1",
        &MessageContent::Media(MediaMessage {
            kind: MediaKind::Image,
            media_url: "https://cdn.example.com/a.png".into(),
            caption: Some("look".into()),
            filename: None,
        }),
    );
    assert_eq!(request.body["type"], json!("image"));
    assert_eq!(
        request.body["image"],
        json!({ "link": "https://cdn.example.com/a.png", "caption": "look" })
    );
}

#[test]
fn document_with_blank_filename_omits_the_field() {
    let request = build_request(
        &creds(),
        "1",
        &MessageContent::Media(MediaMessage {
            kind: MediaKind::Document,
            media_url: "https://cdn.example.com/a.pdf".into(),
            caption: None,
            filename: Some(String::new()),
        }),
    );
    let document = request.body["document"].as_object().unwrap();
    assert!(!document.contains_key("filename"));
    assert!(!document.contains_key("caption"));
}

#[test]
fn document_filename_is_forwarded() {
    let request = build_request(
        &creds(),
        "1",
        &MessageContent::Media(MediaMessage {
            kind: MediaKind::Document,
            media_url: "https://cdn.example.com/a.pdf".into(),
            caption: None,
            filename: Some("report.pdf".into()),
        }),
    );
    assert_eq!(request.body["document"]["filename"], json!("report.pdf"));
}

#[test]
fn audio_never_carries_a_caption() {
    let request = build_request(
        &creds(),
        "1",
        &MessageContent::Media(MediaMessage {
            kind: MediaKind::Audio,
            media_url: "https://cdn.example.com/a.mp3".into(),
            caption: Some("ignored".into()),
            filename: None,
        }),
    );
    let audio = request.body["audio"].as_object().unwrap();
    assert!(!audio.contains_key("caption"));
}

#[test]
fn list_preserves_rows_and_defaults_description() {
    let request = build_request(
        &creds(),
        "1",
        &MessageContent::List(sample_list(None, None)),
    );

    assert_eq!(request.body["type"], json!("interactive"));
    let interactive = &request.body["interactive"];
    assert_eq!(interactive["type"], json!("list"));
    // No description: the title takes the body slot and no header renders.
    assert_eq!(interactive["body"]["text"], json!("Menu"));
    assert!(interactive.get("header").is_none());
    assert!(interactive.get("footer").is_none());
    assert_eq!(interactive["action"]["button"], json!("Open"));
    assert_eq!(
        interactive["action"]["sections"],
        json!([
            {
                "title": "Fruit",
                "rows": [
                    { "id": "r1", "title": "Apple", "description": "Green" },
                    { "id": "r2", "title": "Banana", "description": "" },
                ],
            },
            {
                "title": "Veg",
                "rows": [{ "id": "r3", "title": "Carrot", "description": "" }],
            },
        ])
    );
}

#[test]
fn list_header_requires_title_and_description() {
    let request = build_request(
        &creds(),
        "1",
        &MessageContent::List(sample_list(Some("Pick one"), Some("bye"))),
    );
    let interactive = &request.body["interactive"];
    assert_eq!(
        interactive["header"],
        json!({ "type": "text", "text": "Menu" })
    );
    assert_eq!(interactive["body"]["text"], json!("Pick one"));
    assert_eq!(interactive["footer"]["text"], json!("bye"));

    let blank_description = build_request(
        &creds(),
        "1",
        &MessageContent::List(sample_list(Some(""), None)),
    );
    assert!(blank_description.body["interactive"].get("header").is_none());
}
