use super::Upstreams;
use smart_doh_api::{AppState, ProxySettings};
use smart_doh_application::services::AnswerRewriter;
use smart_doh_application::use_cases::{
    GetRuleSummaryUseCase, GetServiceStatusUseCase, RelayWireQueryUseCase,
    ResolveDnsQueryUseCase,
};
use smart_doh_domain::Config;
use smart_doh_infrastructure::dns::{HickoryWireCodec, RuleSetClassifier};
use std::sync::Arc;
use tracing::info;

pub struct ProxyServices {
    pub resolve_query: Arc<ResolveDnsQueryUseCase>,
    pub relay_wire: Arc<RelayWireQueryUseCase>,
    pub service_status: Arc<GetServiceStatusUseCase>,
    pub rule_summary: Arc<GetRuleSummaryUseCase>,
}

impl ProxyServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let rules = Arc::new(config.rules.to_rule_set()?);
        let pool = Arc::new(config.substitution.to_address_pool()?);

        let classifier = Arc::new(RuleSetClassifier::new(&rules));
        info!(
            rules = rules.total_rules(),
            ipv4_pool = pool.v4().len(),
            ipv6_pool = pool.v6().len(),
            "Domain classifier built"
        );

        let upstreams = Upstreams::new(config)?;
        let rewriter = Arc::new(AnswerRewriter::new(pool.clone(), config.substitution.ttl));

        Ok(Self {
            resolve_query: Arc::new(ResolveDnsQueryUseCase::new(
                classifier.clone(),
                upstreams.resolving.clone(),
                rewriter,
            )),
            relay_wire: Arc::new(RelayWireQueryUseCase::new(
                classifier,
                upstreams.resolving,
                Arc::new(HickoryWireCodec),
            )),
            service_status: Arc::new(GetServiceStatusUseCase::new(upstreams.primary)),
            rule_summary: Arc::new(GetRuleSummaryUseCase::new(rules, pool)),
        })
    }

    pub fn into_app_state(self, config: &Config) -> AppState {
        let upstreams = std::iter::once(config.upstream.primary.clone())
            .chain(config.upstream.fallback.clone())
            .collect();

        AppState {
            resolve_query: self.resolve_query,
            relay_wire: self.relay_wire,
            service_status: self.service_status,
            rule_summary: self.rule_summary,
            settings: Arc::new(ProxySettings {
                client_country_header: config.server.client_country_header.clone(),
                upstreams,
                cache_enabled: config.cache.enabled,
            }),
        }
    }
}
