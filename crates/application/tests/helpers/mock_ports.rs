#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use smart_doh_application::ports::{
    DohUpstream, DomainClassifierPort, UpstreamReply, WireCodecPort,
};
use smart_doh_domain::{
    DomainError, RecordType, ResolutionAnswer, SiteCategory, UpstreamQuery,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Exact-name classifier; suffix matching is covered by the real trie.
#[derive(Default)]
pub struct MockClassifier {
    categories: HashMap<String, SiteCategory>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: &str, category: SiteCategory) -> Self {
        self.categories.insert(domain.to_string(), category);
        self
    }
}

impl DomainClassifierPort for MockClassifier {
    fn classify(&self, domain: &str) -> SiteCategory {
        self.categories
            .get(&domain.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    fn rule_count(&self) -> usize {
        self.categories.len()
    }
}

#[derive(Clone)]
pub struct MockDohUpstream {
    name: String,
    answers: Arc<Mutex<HashMap<String, ResolutionAnswer>>>,
    wire_response: Arc<Mutex<Option<Bytes>>>,
    error: Arc<Mutex<Option<DomainError>>>,
    json_queries: Arc<Mutex<Vec<UpstreamQuery>>>,
    wire_messages: Arc<Mutex<Vec<Bytes>>>,
    fallback_used: bool,
}

impl MockDohUpstream {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            answers: Arc::new(Mutex::new(HashMap::new())),
            wire_response: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            json_queries: Arc::new(Mutex::new(Vec::new())),
            wire_messages: Arc::new(Mutex::new(Vec::new())),
            fallback_used: false,
        }
    }

    pub fn reporting_fallback(mut self) -> Self {
        self.fallback_used = true;
        self
    }

    pub fn set_answer(&self, domain: &str, answer: ResolutionAnswer) {
        self.answers
            .lock()
            .unwrap()
            .insert(domain.to_string(), answer);
    }

    pub fn set_wire_response(&self, bytes: &[u8]) {
        *self.wire_response.lock().unwrap() = Some(Bytes::copy_from_slice(bytes));
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn json_queries(&self) -> Vec<UpstreamQuery> {
        self.json_queries.lock().unwrap().clone()
    }

    pub fn wire_messages(&self) -> Vec<Bytes> {
        self.wire_messages.lock().unwrap().clone()
    }

    fn reply<T>(&self, payload: T) -> UpstreamReply<T> {
        let reply = UpstreamReply::new(payload, self.name.as_str());
        if self.fallback_used {
            reply.via_fallback()
        } else {
            reply
        }
    }
}

#[async_trait]
impl DohUpstream for MockDohUpstream {
    async fn query_json(
        &self,
        query: &UpstreamQuery,
    ) -> Result<UpstreamReply<ResolutionAnswer>, DomainError> {
        self.json_queries.lock().unwrap().push(query.clone());
        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        let answer = self
            .answers
            .lock()
            .unwrap()
            .get(query.name.as_ref())
            .cloned()
            .unwrap_or_else(|| ResolutionAnswer::new(3, vec![]));
        Ok(self.reply(answer))
    }

    async fn relay_wire(&self, message: Bytes) -> Result<UpstreamReply<Bytes>, DomainError> {
        self.wire_messages.lock().unwrap().push(message.clone());
        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        let response = self
            .wire_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(message);
        Ok(self.reply(response))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Encodes the name as ASCII after a 12-byte zero header; enough to
/// round-trip a question through the relay.
pub struct MockWireCodec;

impl WireCodecPort for MockWireCodec {
    fn build_query(&self, name: &str, _record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        let mut message = vec![0u8; 12];
        message.extend_from_slice(name.as_bytes());
        Ok(message)
    }

    fn question_name(&self, message: &[u8]) -> Option<String> {
        let name = std::str::from_utf8(message.get(12..)?).ok()?;
        (!name.is_empty()).then(|| name.to_string())
    }
}
