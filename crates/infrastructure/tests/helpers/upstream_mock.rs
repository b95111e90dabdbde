use async_trait::async_trait;
use bytes::Bytes;
use smart_doh_application::ports::{DohUpstream, UpstreamReply};
use smart_doh_domain::{AnswerRecord, DomainError, RecordType, ResolutionAnswer, UpstreamQuery};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Upstream that counts calls and either answers with a fixed TTL or fails.
pub struct CountingUpstream {
    name: String,
    ttl: u32,
    failure: Option<DomainError>,
    calls: Arc<AtomicUsize>,
}

impl CountingUpstream {
    pub fn answering(name: &str, ttl: u32) -> Self {
        Self {
            name: name.to_string(),
            ttl,
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &str, error: DomainError) -> Self {
        Self {
            failure: Some(error),
            ..Self::answering(name, 0)
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl DohUpstream for CountingUpstream {
    async fn query_json(
        &self,
        query: &UpstreamQuery,
    ) -> Result<UpstreamReply<ResolutionAnswer>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let answer = ResolutionAnswer::new(
            0,
            vec![AnswerRecord::new(
                query.name.as_ref(),
                RecordType::A,
                self.ttl,
                "93.184.216.34",
            )],
        );
        Ok(UpstreamReply::new(answer, self.name.as_str()))
    }

    async fn relay_wire(&self, message: Bytes) -> Result<UpstreamReply<Bytes>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(UpstreamReply::new(message, self.name.as_str()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
