//! DNS-over-HTTPS upstream
//!
//! JSON queries go out as `GET <json_url>?name=..&type=..` with
//! `Accept: application/dns-json`. Wire queries are RFC 8484 POSTs:
//!
//! ```text
//! POST /dns-query HTTP/2
//! Content-Type: application/dns-message
//! Accept: application/dns-message
//!
//! <raw DNS message bytes>
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use smart_doh_application::ports::{DohUpstream, UpstreamReply};
use smart_doh_domain::config::UpstreamEndpoint;
use smart_doh_domain::{DomainError, ResolutionAnswer, UpstreamQuery};
use std::time::Duration;
use tracing::debug;

const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";
const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Shared client with connection pooling; clone it into each upstream.
pub fn build_http_client(user_agent: &str) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(user_agent)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

pub struct HttpsDohUpstream {
    endpoint: UpstreamEndpoint,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpsDohUpstream {
    pub fn new(endpoint: UpstreamEndpoint, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            endpoint,
            client,
            timeout,
        }
    }

    fn unavailable(&self, status: Option<u16>, reason: impl Into<String>) -> DomainError {
        DomainError::upstream(self.endpoint.name.as_str(), status, reason)
    }

    /// Sends the request and reads the whole body, all under one timeout.
    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<Bytes, DomainError> {
        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| self.unavailable(None, format!("request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(self.unavailable(
                    Some(status.as_u16()),
                    status.canonical_reason().unwrap_or("Unknown"),
                ));
            }

            response
                .bytes()
                .await
                .map_err(|e| self.unavailable(None, format!("failed to read body: {}", e)))
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| {
                self.unavailable(None, format!("timed out after {:?}", self.timeout))
            })?
    }
}

#[async_trait]
impl DohUpstream for HttpsDohUpstream {
    async fn query_json(
        &self,
        query: &UpstreamQuery,
    ) -> Result<UpstreamReply<ResolutionAnswer>, DomainError> {
        debug!(
            upstream = %self.endpoint.name,
            domain = %query.name,
            record_type = %query.record_type,
            client_subnet = query.client_subnet,
            "Sending JSON DoH query"
        );

        let request = self
            .client
            .get(&self.endpoint.json_url)
            .header("Accept", DNS_JSON_CONTENT_TYPE)
            .query(&[
                ("name", query.name.as_ref()),
                ("type", query.record_type.as_str()),
                ("cd", "false"),
                ("do", "false"),
                ("edns_client_subnet", query.client_subnet),
            ]);

        let body = self.fetch(request).await?;
        let answer: ResolutionAnswer = serde_json::from_slice(&body)
            .map_err(|e| self.unavailable(None, format!("invalid JSON answer: {}", e)))?;

        debug!(
            upstream = %self.endpoint.name,
            status = answer.status,
            answers = answer.records().len(),
            "JSON DoH response received"
        );

        Ok(UpstreamReply::new(answer, self.endpoint.name.as_str()))
    }

    async fn relay_wire(&self, message: Bytes) -> Result<UpstreamReply<Bytes>, DomainError> {
        debug!(
            upstream = %self.endpoint.name,
            message_len = message.len(),
            "Relaying wire DoH query"
        );

        let request = self
            .client
            .post(&self.endpoint.wire_url)
            .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
            .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
            .body(message);

        let body = self.fetch(request).await?;

        debug!(
            upstream = %self.endpoint.name,
            response_len = body.len(),
            "Wire DoH response received"
        );

        Ok(UpstreamReply::new(body, self.endpoint.name.as_str()))
    }

    fn name(&self) -> &str {
        &self.endpoint.name
    }
}
