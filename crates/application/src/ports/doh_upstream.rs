use async_trait::async_trait;
use bytes::Bytes;
use smart_doh_domain::{DomainError, ResolutionAnswer, UpstreamQuery};
use std::sync::Arc;

/// An upstream payload plus where it came from.
#[derive(Debug, Clone)]
pub struct UpstreamReply<T> {
    pub payload: T,
    pub upstream: Arc<str>,
    pub fallback_used: bool,
    pub cache_hit: bool,
}

impl<T> UpstreamReply<T> {
    pub fn new(payload: T, upstream: impl Into<Arc<str>>) -> Self {
        Self {
            payload,
            upstream: upstream.into(),
            fallback_used: false,
            cache_hit: false,
        }
    }

    pub fn via_fallback(mut self) -> Self {
        self.fallback_used = true;
        self
    }

    pub fn from_cache(mut self) -> Self {
        self.cache_hit = true;
        self
    }
}

#[async_trait]
pub trait DohUpstream: Send + Sync {
    async fn query_json(
        &self,
        query: &UpstreamQuery,
    ) -> Result<UpstreamReply<ResolutionAnswer>, DomainError>;

    /// Forwards an RFC 8484 message and returns the response bytes untouched.
    async fn relay_wire(&self, message: Bytes) -> Result<UpstreamReply<Bytes>, DomainError>;

    fn name(&self) -> &str;
}
