use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

/// Local stand-in for a DoH provider.
///
/// - `/dns-query` answers JSON GETs with one A record and echoes wire POSTs
/// - `/unavailable` always answers 503
/// - `/slow` sleeps for two seconds before answering
/// - `/garbage` answers 200 with a body that is not JSON
pub struct MockDohServer {
    pub base_url: String,
}

impl MockDohServer {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/dns-query", get(json_answer).post(echo_wire))
            .route("/unavailable", get(unavailable).post(unavailable))
            .route("/slow", get(slow).post(slow))
            .route("/garbage", get(garbage).post(garbage));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn json_answer(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let name = params.get("name").cloned().unwrap_or_default();
    let body = json!({
        "Status": 0,
        "TC": false,
        "Question": [{"name": name, "type": 1}],
        "Answer": [{"name": name, "type": 1, "TTL": 120, "data": "140.82.121.4"}],
        "echo": {
            "type": params.get("type"),
            "cd": params.get("cd"),
            "do": params.get("do"),
            "edns_client_subnet": params.get("edns_client_subnet"),
            "accept": headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()),
            "user_agent": headers.get(header::USER_AGENT).and_then(|v| v.to_str().ok()),
        }
    });
    (
        [(header::CONTENT_TYPE, "application/dns-json")],
        body.to_string(),
    )
}

async fn echo_wire(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if content_type != "application/dns-message" {
        return (StatusCode::UNSUPPORTED_MEDIA_TYPE, Bytes::new()).into_response();
    }
    ([(header::CONTENT_TYPE, "application/dns-message")], body).into_response()
}

async fn unavailable() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn slow() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(2)).await;
    StatusCode::OK
}

async fn garbage() -> &'static str {
    "<html>definitely not dns</html>"
}
