use serde::{Deserialize, Serialize};

/// One DoH provider. Most providers serve both formats on one path, but
/// some (Google) keep the JSON API on a separate URL.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpstreamEndpoint {
    pub name: String,

    /// Endpoint answering `application/dns-json` GET queries.
    pub json_url: String,

    /// Endpoint accepting RFC 8484 `application/dns-message` POSTs.
    pub wire_url: String,
}

impl UpstreamEndpoint {
    pub fn cloudflare() -> Self {
        Self {
            name: "cloudflare".to_string(),
            json_url: "https://cloudflare-dns.com/dns-query".to_string(),
            wire_url: "https://cloudflare-dns.com/dns-query".to_string(),
        }
    }

    pub fn google() -> Self {
        Self {
            name: "google".to_string(),
            json_url: "https://dns.google/resolve".to_string(),
            wire_url: "https://dns.google/dns-query".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "UpstreamEndpoint::cloudflare")]
    pub primary: UpstreamEndpoint,

    /// Tried once when the primary is unavailable.
    #[serde(default = "default_fallback")]
    pub fallback: Option<UpstreamEndpoint>,

    /// Seconds before an upstream call counts as unavailable.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            primary: UpstreamEndpoint::cloudflare(),
            fallback: default_fallback(),
            query_timeout: default_query_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_fallback() -> Option<UpstreamEndpoint> {
    Some(UpstreamEndpoint::google())
}

fn default_query_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    concat!("smart-doh/", env!("CARGO_PKG_VERSION")).to_string()
}
