use smart_doh_application::ports::DohUpstream;
use smart_doh_domain::Config;
use smart_doh_infrastructure::dns::{
    build_http_client, CachedUpstream, FailoverUpstream, HttpsDohUpstream,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct Upstreams {
    /// Failover chain, wrapped in the answer cache when enabled.
    pub resolving: Arc<dyn DohUpstream>,
    /// The primary alone; status probes must not fall back or hit the cache.
    pub primary: Arc<dyn DohUpstream>,
}

impl Upstreams {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = build_http_client(&config.upstream.user_agent)?;
        let timeout = Duration::from_secs(config.upstream.query_timeout);

        let primary: Arc<dyn DohUpstream> = Arc::new(HttpsDohUpstream::new(
            config.upstream.primary.clone(),
            client.clone(),
            timeout,
        ));
        let fallback = config.upstream.fallback.clone().map(|endpoint| {
            Arc::new(HttpsDohUpstream::new(endpoint, client.clone(), timeout)) as Arc<dyn DohUpstream>
        });

        info!(
            primary = %config.upstream.primary.name,
            fallback = config.upstream.fallback.as_ref().map(|e| e.name.as_str()).unwrap_or("none"),
            timeout_secs = config.upstream.query_timeout,
            "Upstreams configured"
        );

        let failover: Arc<dyn DohUpstream> =
            Arc::new(FailoverUpstream::new(primary.clone(), fallback));

        let resolving = if config.cache.enabled {
            info!(
                max_entries = config.cache.max_entries,
                min_ttl = config.cache.min_ttl,
                max_ttl = config.cache.max_ttl,
                "Answer cache enabled"
            );
            Arc::new(CachedUpstream::new(
                failover,
                config.cache.max_entries,
                config.cache.min_ttl,
                config.cache.max_ttl,
            )) as Arc<dyn DohUpstream>
        } else {
            failover
        };

        Ok(Self { resolving, primary })
    }
}
