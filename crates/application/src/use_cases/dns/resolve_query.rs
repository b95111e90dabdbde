use crate::ports::{DohUpstream, DomainClassifierPort};
use crate::services::AnswerRewriter;
use serde::Serialize;
use smart_doh_domain::{
    DomainError, ResolutionAnswer, ResolutionQuery, RoutingStrategy, SiteCategory, UpstreamQuery,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Attached to JSON answers under `_proxy_metadata`.
#[derive(Debug, Clone, Serialize)]
pub struct ProxyMetadata {
    pub category: SiteCategory,
    pub routing_strategy: RoutingStrategy,
    pub gaming_mode: bool,
    /// Set for blocked domains, even when no address record needed replacing.
    pub proxy_applied: bool,
    pub substituted: usize,
    pub client_subnet: &'static str,
    pub upstream: Arc<str>,
    pub fallback_used: bool,
    pub cache_hit: bool,
    pub query_time_ms: u64,
    pub timestamp: String,
    pub format: &'static str,
}

#[derive(Debug, Clone)]
pub struct ResolvedQuery {
    pub answer: ResolutionAnswer,
    pub metadata: ProxyMetadata,
}

pub struct ResolveDnsQueryUseCase {
    classifier: Arc<dyn DomainClassifierPort>,
    upstream: Arc<dyn DohUpstream>,
    rewriter: Arc<AnswerRewriter>,
}

impl ResolveDnsQueryUseCase {
    pub fn new(
        classifier: Arc<dyn DomainClassifierPort>,
        upstream: Arc<dyn DohUpstream>,
        rewriter: Arc<AnswerRewriter>,
    ) -> Self {
        Self {
            classifier,
            upstream,
            rewriter,
        }
    }

    pub fn classify(&self, domain: &str) -> SiteCategory {
        self.classifier.classify(domain)
    }

    pub async fn execute(&self, query: &ResolutionQuery) -> Result<ResolvedQuery, DomainError> {
        let start = Instant::now();

        let domain = query.name.trim().trim_end_matches('.');
        if domain.is_empty() {
            return Err(DomainError::InvalidInput(
                "Domain name must not be empty".to_string(),
            ));
        }

        let category = self.classifier.classify(domain);
        let from_iran = query.is_from_iran();
        let strategy = RoutingStrategy::select(category, query.geo, from_iran, query.gaming);
        let client_subnet = strategy.client_subnet(from_iran);

        debug!(
            domain = %domain,
            category = %category,
            strategy = %strategy,
            record_type = %query.record_type,
            "Resolving query"
        );

        let upstream_query = UpstreamQuery::new(domain, query.record_type, client_subnet);
        let reply = self.upstream.query_json(&upstream_query).await.map_err(|e| {
            warn!(domain = %domain, error = %e, "Upstream resolution failed");
            e
        })?;

        let answer = self.rewriter.rewrite(reply.payload, category, domain);
        let substituted = answer.substituted_count();
        if substituted > 0 {
            debug!(domain = %domain, substituted, "Substituted blocked-domain addresses");
        }

        let metadata = ProxyMetadata {
            category,
            routing_strategy: strategy,
            gaming_mode: query.gaming || category == SiteCategory::Gaming,
            proxy_applied: category == SiteCategory::Blocked,
            substituted,
            client_subnet,
            upstream: reply.upstream,
            fallback_used: reply.fallback_used,
            cache_hit: reply.cache_hit,
            query_time_ms: start.elapsed().as_millis() as u64,
            timestamp: chrono::Utc::now().to_rfc3339(),
            format: "JSON",
        };

        Ok(ResolvedQuery { answer, metadata })
    }
}
