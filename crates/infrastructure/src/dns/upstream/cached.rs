use async_trait::async_trait;
use bytes::Bytes;
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use smart_doh_application::ports::{DohUpstream, UpstreamReply};
use smart_doh_domain::{DomainError, ResolutionAnswer, UpstreamQuery};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::debug;

struct CachedAnswer {
    answer: ResolutionAnswer,
    upstream: Arc<str>,
    fallback_used: bool,
    expires_at: Instant,
}

type AnswerCache = LruCache<UpstreamQuery, CachedAnswer, FxBuildHasher>;

/// Bounded cache of JSON answers in front of another upstream.
///
/// Entries live for the answer's smallest TTL clamped to `[min_ttl, max_ttl]`.
/// Errors and wire relays are never cached. The lock is never held across an
/// upstream call.
pub struct CachedUpstream {
    inner: Arc<dyn DohUpstream>,
    cache: Mutex<AnswerCache>,
    min_ttl: u32,
    max_ttl: u32,
}

impl CachedUpstream {
    pub fn new(inner: Arc<dyn DohUpstream>, max_entries: usize, min_ttl: u32, max_ttl: u32) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::with_hasher(capacity, FxBuildHasher)),
            min_ttl,
            max_ttl,
        }
    }

    fn lifetime(&self, answer: &ResolutionAnswer) -> u32 {
        answer
            .min_ttl()
            .unwrap_or(self.min_ttl)
            .clamp(self.min_ttl, self.max_ttl)
    }

    fn lookup(&self, query: &UpstreamQuery) -> Option<UpstreamReply<ResolutionAnswer>> {
        let mut cache = self.cache.lock().ok()?;
        let now = Instant::now();

        let expired = cache.peek(query)?.expires_at <= now;
        if expired {
            cache.pop(query);
            return None;
        }

        let entry = cache.get(query)?;
        let reply = UpstreamReply::new(entry.answer.clone(), Arc::clone(&entry.upstream));
        let reply = if entry.fallback_used {
            reply.via_fallback()
        } else {
            reply
        };
        Some(reply.from_cache())
    }

    fn store(&self, query: &UpstreamQuery, reply: &UpstreamReply<ResolutionAnswer>) {
        let lifetime = self.lifetime(&reply.payload);
        if lifetime == 0 {
            return;
        }
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(
                query.clone(),
                CachedAnswer {
                    answer: reply.payload.clone(),
                    upstream: Arc::clone(&reply.upstream),
                    fallback_used: reply.fallback_used,
                    expires_at: Instant::now() + Duration::from_secs(u64::from(lifetime)),
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DohUpstream for CachedUpstream {
    async fn query_json(
        &self,
        query: &UpstreamQuery,
    ) -> Result<UpstreamReply<ResolutionAnswer>, DomainError> {
        if let Some(hit) = self.lookup(query) {
            debug!(domain = %query.name, record_type = %query.record_type, "Answer cache hit");
            return Ok(hit);
        }

        let reply = self.inner.query_json(query).await?;
        self.store(query, &reply);
        Ok(reply)
    }

    async fn relay_wire(&self, message: Bytes) -> Result<UpstreamReply<Bytes>, DomainError> {
        self.inner.relay_wire(message).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
