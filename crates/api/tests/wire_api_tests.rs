mod helpers;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use helpers::{create_test_app, send, ScriptedUpstream};
use std::sync::Arc;

/// google.com A, ID 0, RD set.
const GOOGLE_QUERY: &[u8] = &[
    0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 6, b'g', b'o', b'o', b'g', b'l', b'e', 3, b'c', b'o',
    b'm', 0, 0, 1, 0, 1,
];
const GOOGLE_QUERY_B64: &str = "AAABAAABAAAAAAAABmdvb2dsZQNjb20AAAEAAQ";
const CANNED_RESPONSE: &[u8] = &[0, 0, 0x81, 0x80, 0, 1, 0, 0, 0, 0, 0, 0, 0xca, 0xfe];

#[tokio::test]
async fn test_get_with_dns_param_relays_bytes() {
    let primary = Arc::new(ScriptedUpstream::new("cloudflare").with_wire_response(CANNED_RESPONSE));
    let app = create_test_app(primary.clone(), None);

    let request = Request::builder()
        .uri(format!("/dns-query?dns={}", GOOGLE_QUERY_B64))
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_ref(), CANNED_RESPONSE);
    assert_eq!(headers[header::CONTENT_TYPE], "application/dns-message");
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=300");
    assert_eq!(headers["x-proxy-format"], "Wire");
    assert_eq!(headers["x-site-category"], "normal");
    assert_eq!(primary.call_count(), 1);
}

#[tokio::test]
async fn test_post_relays_body_verbatim() {
    let primary = Arc::new(ScriptedUpstream::new("cloudflare"));
    let app = create_test_app(primary, None);

    let request = Request::builder()
        .method("POST")
        .uri("/dns-query")
        .header(header::CONTENT_TYPE, "application/dns-message")
        .body(Body::from(GOOGLE_QUERY))
        .unwrap();
    let (status, headers, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_ref(), GOOGLE_QUERY);
    assert_eq!(headers[header::CONTENT_TYPE], "application/dns-message");
}

#[tokio::test]
async fn test_post_with_wrong_content_type_is_400() {
    let primary = Arc::new(ScriptedUpstream::new("cloudflare"));
    let app = create_test_app(primary.clone(), None);

    let request = Request::builder()
        .method("POST")
        .uri("/dns-query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _, _) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(primary.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_base64_is_decode_error() {
    let app = create_test_app(Arc::new(ScriptedUpstream::new("cloudflare")), None);

    let request = Request::builder()
        .uri("/dns-query?dns=@@not@base64@@")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Malformed DNS message");
}

#[tokio::test]
async fn test_blocked_wire_query_is_not_rewritten() {
    let primary = Arc::new(ScriptedUpstream::new("cloudflare").with_wire_response(CANNED_RESPONSE));
    let app = create_test_app(primary, None);

    let request = Request::builder()
        .uri("/dns-query?name=twitter.com&type=A")
        .header(header::ACCEPT, "application/dns-message")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_ref(), CANNED_RESPONSE);
    assert_eq!(headers["x-site-category"], "blocked");
}

#[tokio::test]
async fn test_wire_upstream_failure_is_500_json() {
    let primary = Arc::new(ScriptedUpstream::failing_with_status("cloudflare", 502));
    let app = create_test_app(primary, None);

    let request = Request::builder()
        .method("POST")
        .uri("/dns-query")
        .header(header::CONTENT_TYPE, "application/dns-message")
        .body(Body::from(GOOGLE_QUERY))
        .unwrap();
    let (status, headers, body) = send(app, request).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(json["error"], "DNS query failed");
}
