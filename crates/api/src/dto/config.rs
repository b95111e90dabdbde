use super::UsageExamples;
use serde::Serialize;
use smart_doh_domain::{RoutingStrategy, SiteCategory};

#[derive(Debug, Serialize)]
pub struct RuleCategoryResponse {
    pub category: SiteCategory,
    pub count: usize,
    pub domains: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubstitutionPoolResponse {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UpstreamResponse {
    pub name: String,
    pub json_url: String,
    pub wire_url: String,
    pub role: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub version: &'static str,
    pub rules: Vec<RuleCategoryResponse>,
    pub total_rules: usize,
    pub substitution_pool: SubstitutionPoolResponse,
    pub upstreams: Vec<UpstreamResponse>,
    pub routing_strategies: &'static [RoutingStrategy],
    pub examples: UsageExamples,
}
