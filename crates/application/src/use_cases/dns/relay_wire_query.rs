use crate::ports::{DohUpstream, DomainClassifierPort, WireCodecPort};
use bytes::Bytes;
use smart_doh_domain::{DomainError, RecordType, SiteCategory};
use std::sync::Arc;
use tracing::{debug, warn};

pub const MAX_DNS_MESSAGE_BYTES: usize = 65_535;
/// Header plus a root question.
const MIN_DNS_MESSAGE_BYTES: usize = 12;

#[derive(Debug, Clone)]
pub struct RelayedWire {
    pub message: Bytes,
    pub question: Option<String>,
    /// Observed only; wire answers are never rewritten.
    pub category: Option<SiteCategory>,
    pub upstream: Arc<str>,
    pub fallback_used: bool,
}

pub struct RelayWireQueryUseCase {
    classifier: Arc<dyn DomainClassifierPort>,
    upstream: Arc<dyn DohUpstream>,
    codec: Arc<dyn WireCodecPort>,
}

impl RelayWireQueryUseCase {
    pub fn new(
        classifier: Arc<dyn DomainClassifierPort>,
        upstream: Arc<dyn DohUpstream>,
        codec: Arc<dyn WireCodecPort>,
    ) -> Self {
        Self {
            classifier,
            upstream,
            codec,
        }
    }

    pub async fn execute(&self, message: Bytes) -> Result<RelayedWire, DomainError> {
        if message.len() < MIN_DNS_MESSAGE_BYTES {
            return Err(DomainError::DecodeError(format!(
                "DNS message too short: {} bytes",
                message.len()
            )));
        }
        if message.len() > MAX_DNS_MESSAGE_BYTES {
            return Err(DomainError::DecodeError(format!(
                "DNS message exceeds {} bytes",
                MAX_DNS_MESSAGE_BYTES
            )));
        }

        let question = self.codec.question_name(&message);
        let category = question.as_deref().map(|q| self.classifier.classify(q));
        debug!(
            question = question.as_deref().unwrap_or("<unparsed>"),
            category = category.map(|c| c.as_str()).unwrap_or("unknown"),
            bytes = message.len(),
            "Relaying wire query"
        );

        let reply = self.upstream.relay_wire(message).await.map_err(|e| {
            warn!(error = %e, "Wire relay failed");
            e
        })?;

        Ok(RelayedWire {
            message: reply.payload,
            question,
            category,
            upstream: reply.upstream,
            fallback_used: reply.fallback_used,
        })
    }

    /// Builds a wire query for `name` and relays it, for clients that send
    /// `name=` but accept only `application/dns-message`.
    pub async fn execute_for_name(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<RelayedWire, DomainError> {
        let name = name.trim().trim_end_matches('.');
        if name.is_empty() {
            return Err(DomainError::InvalidInput(
                "Domain name must not be empty".to_string(),
            ));
        }
        let message = self.codec.build_query(name, record_type)?;
        self.execute(Bytes::from(message)).await
    }
}
