use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use virtual_card::server::create_router;
use virtual_card::{CardFetcher, SupabaseClient};

/// Router backed by the mock server.
fn router_for(server: &MockServer) -> axum::Router {
    let client =
        SupabaseClient::new(&server.base_url(), "anon", Duration::from_secs(5)).unwrap();
    create_router(Arc::new(CardFetcher::new(client)))
}

async fn mock_card(server: &MockServer, public_id: &str) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/functions/v1/get-public-card/{}", public_id));
            then.status(200).json_body(json!({
                "card": {
                    "id": "card-1",
                    "public_id": public_id,
                    "full_name": "Grace \"Amazing\" Hopper",
                    "title": "Rear Admiral",
                    "company": "US Navy",
                    "phone_number": "+1 555 0100",
                    "email": "grace@example.com",
                    "whatsapp_number": "+1 555 0100",
                    "whatsapp_enabled": true,
                    "is_published": true
                },
                "links": [
                    {"id": "l1", "card_id": "card-1", "label": "COBOL", "type": "url", "value": "https://cobol.example", "order_index": 0}
                ],
                "template": {"id": "t1", "name": "Classic", "config_json": {}}
            }));
        })
        .await;
}

async fn mock_missing(server: &MockServer, public_id: &str) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/functions/v1/get-public-card/{}", public_id));
            then.status(404);
        })
        .await;
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_card_page_renders_resolved_template() {
    let server = MockServer::start_async().await;
    mock_card(&server, "grace").await;

    let response = router_for(&server).oneshot(get("/grace")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("data-template-key=\"classic\""));
    assert!(html.contains("Grace &quot;Amazing&quot; Hopper"));
    assert!(html.contains("https://wa.me/+15550100"));
    assert!(html.contains("href=\"https://cobol.example\""));
    assert!(html.contains("/grace/contact.vcf"));
}

#[tokio::test]
async fn test_unknown_card_returns_not_found_page() {
    let server = MockServer::start_async().await;
    mock_missing(&server, "nobody").await;

    let response = router_for(&server).oneshot(get("/nobody")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains("Card Not Found"));
}

#[tokio::test]
async fn test_contact_file_download() {
    let server = MockServer::start_async().await;
    mock_card(&server, "grace").await;

    let response = router_for(&server)
        .oneshot(get("/grace/contact.vcf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/vcard;charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"grace-_amazing_-hopper.vcf\""
    );

    let vcard = body_text(response).await;
    assert!(vcard.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
    assert!(vcard.contains("ORG:US Navy\n"));
    assert!(vcard.contains("TEL;TYPE=VOICE,WORK:+15550100\n"));
    assert!(vcard.contains("item0.URL:https://cobol.example\n"));
    assert!(vcard.trim_end().ends_with("END:VCARD"));
}

#[tokio::test]
async fn test_contact_file_for_missing_card_is_404() {
    let server = MockServer::start_async().await;
    mock_missing(&server, "nobody").await;

    let response = router_for(&server)
        .oneshot(get("/nobody/contact.vcf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home_page_and_unknown_routes() {
    let server = MockServer::start_async().await;
    let router = router_for(&server);

    let home = router.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(home.status(), StatusCode::OK);
    assert!(body_text(home).await.contains("<!DOCTYPE html>"));

    let nested = router.oneshot(get("/a/b/c")).await.unwrap();
    assert_eq!(nested.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_file_with_control_character_in_name() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/functions/v1/get-public-card/ada");
            then.status(200).json_body(json!({
                "card": {
                    "id": "card-2",
                    "public_id": "ada",
                    "full_name": "Ada\u{7}Lovelace",
                    "is_published": true
                },
                "links": []
            }));
        })
        .await;

    let response = router_for(&server)
        .oneshot(get("/ada/contact.vcf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"adalovelace.vcf\""
    );
}
