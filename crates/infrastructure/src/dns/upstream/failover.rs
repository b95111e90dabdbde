use async_trait::async_trait;
use bytes::Bytes;
use smart_doh_application::ports::{DohUpstream, UpstreamReply};
use smart_doh_domain::{DomainError, ResolutionAnswer, UpstreamQuery};
use std::sync::Arc;
use tracing::{debug, warn};

/// Primary first, then at most one attempt on the fallback.
///
/// Only `UpstreamUnavailable` triggers the retry; any other error is the
/// caller's problem and goes straight back.
pub struct FailoverUpstream {
    primary: Arc<dyn DohUpstream>,
    fallback: Option<Arc<dyn DohUpstream>>,
}

impl FailoverUpstream {
    pub fn new(primary: Arc<dyn DohUpstream>, fallback: Option<Arc<dyn DohUpstream>>) -> Self {
        Self { primary, fallback }
    }

    fn fallback_for(&self, error: &DomainError) -> Option<&Arc<dyn DohUpstream>> {
        if !error.is_upstream_unavailable() {
            return None;
        }
        let fallback = self.fallback.as_ref()?;
        warn!(
            primary = self.primary.name(),
            fallback = fallback.name(),
            error = %error,
            "Failing over"
        );
        Some(fallback)
    }
}

#[async_trait]
impl DohUpstream for FailoverUpstream {
    async fn query_json(
        &self,
        query: &UpstreamQuery,
    ) -> Result<UpstreamReply<ResolutionAnswer>, DomainError> {
        match self.primary.query_json(query).await {
            Ok(reply) => Ok(reply),
            Err(e) => match self.fallback_for(&e) {
                Some(fallback) => {
                    let reply = fallback.query_json(query).await?;
                    debug!(upstream = fallback.name(), domain = %query.name, "Fallback responded");
                    Ok(reply.via_fallback())
                }
                None => Err(e),
            },
        }
    }

    async fn relay_wire(&self, message: Bytes) -> Result<UpstreamReply<Bytes>, DomainError> {
        match self.primary.relay_wire(message.clone()).await {
            Ok(reply) => Ok(reply),
            Err(e) => match self.fallback_for(&e) {
                Some(fallback) => {
                    let reply = fallback.relay_wire(message).await?;
                    debug!(upstream = fallback.name(), "Fallback relayed wire query");
                    Ok(reply.via_fallback())
                }
                None => Err(e),
            },
        }
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}
