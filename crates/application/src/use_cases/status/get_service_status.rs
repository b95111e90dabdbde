use crate::ports::DohUpstream;
use serde::Serialize;
use smart_doh_domain::routing::ANONYMOUS_CLIENT_SUBNET;
use smart_doh_domain::{DomainError, RecordType, UpstreamQuery};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

const PROBE_DOMAIN: &str = "google.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamHealth {
    Healthy,
    /// Reachable but answered with a non-success HTTP status.
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub upstream: String,
    pub status: UpstreamHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Probes the primary upstream directly, bypassing cache and failover.
pub struct GetServiceStatusUseCase {
    primary: Arc<dyn DohUpstream>,
}

impl GetServiceStatusUseCase {
    pub fn new(primary: Arc<dyn DohUpstream>) -> Self {
        Self { primary }
    }

    pub async fn execute(&self) -> ServiceStatus {
        let query = UpstreamQuery::new(PROBE_DOMAIN, RecordType::A, ANONYMOUS_CLIENT_SUBNET);
        let start = Instant::now();
        let result = self.primary.query_json(&query).await;
        let latency_ms = start.elapsed().as_millis() as u64;
        let upstream = self.primary.name().to_string();

        match result {
            Ok(_) => {
                debug!(upstream = %upstream, latency_ms, "Upstream probe succeeded");
                ServiceStatus {
                    upstream,
                    status: UpstreamHealth::Healthy,
                    latency_ms: Some(latency_ms),
                    response_code: Some(200),
                    error: None,
                }
            }
            Err(DomainError::UpstreamUnavailable {
                status: Some(code),
                ..
            }) => {
                warn!(upstream = %upstream, status = code, "Upstream probe degraded");
                ServiceStatus {
                    upstream,
                    status: UpstreamHealth::Degraded,
                    latency_ms: Some(latency_ms),
                    response_code: Some(code),
                    error: None,
                }
            }
            Err(e) => {
                warn!(upstream = %upstream, error = %e, "Upstream probe failed");
                ServiceStatus {
                    upstream,
                    status: UpstreamHealth::Unhealthy,
                    latency_ms: None,
                    response_code: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
