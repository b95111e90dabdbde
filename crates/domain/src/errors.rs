use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed DNS message encoding: {0}")]
    DecodeError(String),

    #[error("Upstream {upstream} unavailable{}: {reason}", http_suffix(.status))]
    UpstreamUnavailable {
        upstream: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn http_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl DomainError {
    pub fn upstream(upstream: impl Into<String>, status: Option<u16>, reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            upstream: upstream.into(),
            status,
            reason: reason.into(),
        }
    }

    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. })
    }

    /// HTTP status reported by the upstream, when it answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamUnavailable { status, .. } => *status,
            _ => None,
        }
    }
}
