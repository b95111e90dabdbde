use serde::Serialize;
use smart_doh_application::use_cases::ServiceStatus;

#[derive(Debug, Serialize)]
pub struct RuleStatistics {
    pub total_rules: usize,
    pub iranian_sites: usize,
    pub blocked_sites: usize,
    pub gaming_domains: usize,
    pub ipv4_pool_size: usize,
    pub ipv6_pool_size: usize,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub status: &'static str,
    pub health_checks: Vec<ServiceStatus>,
    pub statistics: RuleStatistics,
    pub dns_formats: &'static [&'static str],
    pub cache_enabled: bool,
}
