use crate::{
    dto::{
        ConfigResponse, RuleCategoryResponse, SubstitutionPoolResponse, UpstreamResponse,
        UsageExamples,
    },
    handlers::status::SERVICE_VERSION,
    state::AppState,
};
use axum::{extract::State, Json};
use smart_doh_domain::RoutingStrategy;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_config")]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    debug!("Fetching rule configuration");

    let summary = state.rule_summary.execute();

    let upstreams = state
        .settings
        .upstreams
        .iter()
        .enumerate()
        .map(|(i, endpoint)| UpstreamResponse {
            name: endpoint.name.clone(),
            json_url: endpoint.json_url.clone(),
            wire_url: endpoint.wire_url.clone(),
            role: if i == 0 { "primary" } else { "fallback" },
        })
        .collect();

    Json(ConfigResponse {
        version: SERVICE_VERSION,
        rules: summary
            .categories
            .into_iter()
            .map(|c| RuleCategoryResponse {
                category: c.category,
                count: c.count,
                domains: c.domains,
            })
            .collect(),
        total_rules: summary.total_rules,
        substitution_pool: SubstitutionPoolResponse {
            ipv4: summary.ipv4_pool,
            ipv6: summary.ipv6_pool,
        },
        upstreams,
        routing_strategies: RoutingStrategy::all(),
        examples: UsageExamples::default(),
    })
}
