use serde_json::json;
use wasend_core::{
    ApiProvider, CredentialBag, ListContent, ListRow, ListSection, MediaKind, MediaMessage,
    MessageContent, ProviderCredentials, build_request,
};

fn creds() -> ProviderCredentials {
    let bag = CredentialBag::new()
        .with("baseUrl", "https://evo.example.com")
        .with("apiKey", "evo-key")
        .with("instanceName", "main");
    ProviderCredentials::select(ApiProvider::Evolution, &bag)
}

fn media(kind: MediaKind, caption: Option<&str>, filename: Option<&str>) -> MessageContent {
    MessageContent::Media(MediaMessage {
        kind,
        media_url: "https://cdn.example.com/m".into(),
        caption: caption.map(Into::into),
        filename: filename.map(Into::into),
    })
}

#[test]
fn text_endpoint_and_body() {
    let request = build_request(
        &creds(),
        "5511999999999",
        &MessageContent::Text { message: "hi".into() },
    );

    assert_eq!(request.method, http::Method::POST);
    assert_eq!(request.url, "https://evo.example.com/message/sendText/main");
    assert_eq!(request.headers.get("apikey").unwrap(), "evo-key");
    assert_eq!(
        request.headers.get("Content-Type").unwrap(),
        "application/json"
    );
    assert_eq!(
        request.body,
        json!({ "number": "5511999999999", "text": "hi" })
    );
}

#[test]
fn media_carries_fixed_mimetype_per_kind() {
    let cases = [
        (MediaKind::Image, "image", "image/png", "file.png"),
        (MediaKind::Document, "document", "application/pdf", "document.pdf"),
        (MediaKind::Audio, "audio", "audio/mp3", "file.mp3"),
        (MediaKind::Video, "video", "video/mp4", "file.mp4"),
    ];
    for (kind, mediatype, mimetype, filename) in cases {
        let request = build_request(&creds(), "1", &media(kind, None, None));
        assert_eq!(request.url, "https://evo.example.com/message/sendMedia/main");
        assert_eq!(
            request.body,
            json!({
                "number": "1",
                "mediatype": mediatype,
                "mimetype": mimetype,
                "media": "https://cdn.example.com/m",
                "caption": "",
                "fileName": filename,
            })
        );
    }
}

#[test]
fn document_blank_filename_defaults_to_document_pdf() {
    let request = build_request(&creds(), "1", &media(MediaKind::Document, None, Some("")));
    assert_eq!(request.body["fileName"], json!("document.pdf"));

    let named = build_request(
        &creds(),
        "1",
        &media(MediaKind::Document, None, Some("report.pdf")),
    );
    assert_eq!(named.body["fileName"], json!("report.pdf"));
}

#[test]
fn captions_apply_to_visual_media_only() {
    let image = build_request(&creds(), "1", &media(MediaKind::Image, Some("look"), None));
    assert_eq!(image.body["caption"], json!("look"));

    let audio = build_request(&creds(), "1", &media(MediaKind::Audio, Some("ignored"), None));
    assert_eq!(audio.body["caption"], json!(""));
}

#[test]
fn list_maps_sections_with_row_ids() {
    let list = ListContent {
        title: "Menu".into(),
        button_text: "Open".into(),
        sections: vec![ListSection {
            title: "Fruit".into(),
            rows: vec![
                ListRow { id: "r1".into(), title: "Apple".into(), description: Some("Green".into()) },
                ListRow { id: "r2".into(), title: "Banana".into(), description: None },
            ],
        }],
        description: None,
        footer_text: Some("bye".into()),
    };

    let request = build_request(&creds(), "1", &MessageContent::List(list));
    assert_eq!(request.url, "https://evo.example.com/message/sendList/main");
    assert_eq!(
        request.body,
        json!({
            "number": "1",
            "title": "Menu",
            "description": "Menu",
            "buttonText": "Open",
            "footerText": "bye",
            "values": [
                {
                    "title": "Fruit",
                    "rows": [
                        { "title": "Apple", "description": "Green", "rowId": "r1" },
                        { "title": "Banana", "description": "", "rowId": "r2" },
                    ],
                },
            ],
        })
    );
}

#[test]
fn list_description_falls_back_to_title() {
    let list = ListContent {
        title: "Menu".into(),
        button_text: "Open".into(),
        sections: vec![],
        description: Some("Pick one".into()),
        footer_text: None,
    };
    let request = build_request(&creds(), "1", &MessageContent::List(list));
    assert_eq!(request.body["description"], json!("Pick one"));
    assert_eq!(request.body["footerText"], json!(""));
}
