use smart_doh_application::use_cases::{
    GetRuleSummaryUseCase, GetServiceStatusUseCase, RelayWireQueryUseCase,
    ResolveDnsQueryUseCase,
};
use smart_doh_domain::config::UpstreamEndpoint;
use std::sync::Arc;

/// Request-independent settings the handlers need.
#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub client_country_header: String,
    pub upstreams: Vec<UpstreamEndpoint>,
    pub cache_enabled: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub resolve_query: Arc<ResolveDnsQueryUseCase>,
    pub relay_wire: Arc<RelayWireQueryUseCase>,
    pub service_status: Arc<GetServiceStatusUseCase>,
    pub rule_summary: Arc<GetRuleSummaryUseCase>,
    pub settings: Arc<ProxySettings>,
}
