#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use http_body_util::BodyExt;
use serde_json::Value;
use smart_doh_api::{create_api_routes, AppState, ProxySettings};
use smart_doh_application::ports::{DohUpstream, UpstreamReply};
use smart_doh_application::services::AnswerRewriter;
use smart_doh_application::use_cases::{
    GetRuleSummaryUseCase, GetServiceStatusUseCase, RelayWireQueryUseCase,
    ResolveDnsQueryUseCase,
};
use smart_doh_domain::config::UpstreamEndpoint;
use smart_doh_domain::{
    AddressPool, AnswerRecord, DomainError, DomainRuleSet, RecordType, ResolutionAnswer,
    UpstreamQuery,
};
use smart_doh_infrastructure::dns::{FailoverUpstream, HickoryWireCodec, RuleSetClassifier};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const POOL_V4: &[&str] = &["104.16.132.229", "104.16.133.229", "172.67.69.9"];

/// Upstream that answers from a table, or fails every call.
pub struct ScriptedUpstream {
    name: String,
    answers: Mutex<HashMap<String, ResolutionAnswer>>,
    wire_response: Option<Bytes>,
    failure: Option<DomainError>,
    pub calls: AtomicUsize,
}

impl ScriptedUpstream {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            answers: Mutex::new(HashMap::new()),
            wire_response: None,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_with_status(name: &str, status: u16) -> Self {
        Self {
            failure: Some(DomainError::upstream(name, Some(status), "Internal Server Error")),
            ..Self::new(name)
        }
    }

    pub fn with_answer(self, name: &str, records: Vec<AnswerRecord>) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(name.to_string(), ResolutionAnswer::new(0, records));
        self
    }

    pub fn with_wire_response(mut self, bytes: &'static [u8]) -> Self {
        self.wire_response = Some(Bytes::from_static(bytes));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DohUpstream for ScriptedUpstream {
    async fn query_json(
        &self,
        query: &UpstreamQuery,
    ) -> Result<UpstreamReply<ResolutionAnswer>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let answer = self
            .answers
            .lock()
            .unwrap()
            .get(query.name.as_ref())
            .cloned()
            .unwrap_or_else(|| ResolutionAnswer::new(3, vec![]));
        Ok(UpstreamReply::new(answer, self.name.as_str()))
    }

    async fn relay_wire(&self, message: Bytes) -> Result<UpstreamReply<Bytes>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let response = self.wire_response.clone().unwrap_or(message);
        Ok(UpstreamReply::new(response, self.name.as_str()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn a_record(name: &str, ip: &str, ttl: u32) -> AnswerRecord {
    AnswerRecord::new(name, RecordType::A, ttl, ip)
}

pub fn create_test_app(
    primary: Arc<ScriptedUpstream>,
    fallback: Option<Arc<ScriptedUpstream>>,
) -> Router {
    let rules = Arc::new(DomainRuleSet::default());
    let pool = Arc::new(AddressPool::parse(POOL_V4, &["2606:4700::6810:84e5"]).unwrap());

    let classifier = Arc::new(RuleSetClassifier::new(&rules));
    let rewriter = Arc::new(AnswerRewriter::new(Arc::clone(&pool), 300));
    let upstream: Arc<dyn DohUpstream> = Arc::new(FailoverUpstream::new(
        primary.clone(),
        fallback.map(|f| f as Arc<dyn DohUpstream>),
    ));

    let state = AppState {
        resolve_query: Arc::new(ResolveDnsQueryUseCase::new(
            classifier.clone(),
            upstream.clone(),
            rewriter,
        )),
        relay_wire: Arc::new(RelayWireQueryUseCase::new(
            classifier,
            upstream,
            Arc::new(HickoryWireCodec),
        )),
        service_status: Arc::new(GetServiceStatusUseCase::new(primary)),
        rule_summary: Arc::new(GetRuleSummaryUseCase::new(rules, pool)),
        settings: Arc::new(ProxySettings {
            client_country_header: "CF-IPCountry".to_string(),
            upstreams: vec![UpstreamEndpoint::cloudflare(), UpstreamEndpoint::google()],
            cache_enabled: false,
        }),
    };

    create_api_routes(state)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, headers, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).unwrap();
    (status, headers, json)
}
