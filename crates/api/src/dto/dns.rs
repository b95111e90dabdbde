use serde::{Deserialize, Serialize};
use smart_doh_application::use_cases::ProxyMetadata;
use smart_doh_domain::{ResolutionAnswer, SiteCategory};

#[derive(Debug, Default, Deserialize)]
pub struct DnsQueryParams {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    /// Base64url-encoded RFC 8484 message.
    pub dns: Option<String>,
    pub gaming: Option<String>,
    pub geo: Option<String>,
    pub format: Option<String>,
}

impl DnsQueryParams {
    pub fn gaming_requested(&self) -> bool {
        matches!(self.gaming.as_deref(), Some("true") | Some("1"))
    }

    pub fn wants_simple_format(&self) -> bool {
        self.format.as_deref() == Some("simple")
    }

    pub fn domain(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// An empty `dns=` counts as absent.
    pub fn wire_message(&self) -> Option<&str> {
        self.dns.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

/// Upstream document with `_proxy_metadata` alongside its own fields.
#[derive(Serialize)]
pub struct FullAnswerResponse<'a> {
    #[serde(flatten)]
    pub answer: &'a ResolutionAnswer,
    #[serde(rename = "_proxy_metadata")]
    pub metadata: &'a ProxyMetadata,
}

#[derive(Debug, Serialize)]
pub struct SimpleAnswer {
    pub data: String,
    pub ttl: u32,
    pub proxied: bool,
}

#[derive(Debug, Serialize)]
pub struct SimpleAnswerResponse {
    pub domain: String,
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub answers: Vec<SimpleAnswer>,
    pub category: SiteCategory,
    pub success: bool,
}

impl SimpleAnswerResponse {
    pub fn from_answer(
        domain: &str,
        record_type: &'static str,
        answer: &ResolutionAnswer,
        category: SiteCategory,
    ) -> Self {
        Self {
            domain: domain.to_string(),
            record_type,
            answers: answer
                .records()
                .iter()
                .map(|r| SimpleAnswer {
                    data: r.data.clone(),
                    ttl: r.ttl,
                    proxied: r.substituted,
                })
                .collect(),
            category,
            success: answer.is_success(),
        }
    }
}
