use crate::{
    dto::{RuleStatistics, StatusResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use smart_doh_application::use_cases::{RuleSummary, UpstreamHealth};
use smart_doh_domain::SiteCategory;
use tracing::{debug, instrument};

pub(crate) const SERVICE_NAME: &str = "Smart DoH Proxy";
pub(crate) const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[instrument(skip(state), name = "api_get_status")]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let health = state.service_status.execute().await;
    let summary = state.rule_summary.execute();
    debug!(upstream = %health.upstream, status = ?health.status, "Status probe finished");

    let status = match health.status {
        UpstreamHealth::Healthy => "operational",
        UpstreamHealth::Degraded | UpstreamHealth::Unhealthy => "degraded",
    };

    Json(StatusResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: chrono::Utc::now().to_rfc3339(),
        status,
        health_checks: vec![health],
        statistics: RuleStatistics {
            total_rules: summary.total_rules,
            iranian_sites: category_count(&summary, SiteCategory::Iranian),
            blocked_sites: category_count(&summary, SiteCategory::Blocked),
            gaming_domains: category_count(&summary, SiteCategory::Gaming),
            ipv4_pool_size: summary.ipv4_pool.len(),
            ipv6_pool_size: summary.ipv6_pool.len(),
        },
        dns_formats: &["JSON", "Wire Format", "Base64"],
        cache_enabled: state.settings.cache_enabled,
    })
}

fn category_count(summary: &RuleSummary, category: SiteCategory) -> usize {
    summary
        .categories
        .iter()
        .find(|c| c.category == category)
        .map(|c| c.count)
        .unwrap_or(0)
}
