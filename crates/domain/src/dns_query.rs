use super::{GeoOverride, RecordType};
use std::sync::Arc;

/// A JSON-path DoH query, built per incoming request. Wire-format requests are
/// relayed as raw messages and never build one.
#[derive(Debug, Clone)]
pub struct ResolutionQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub gaming: bool,
    pub geo: Option<GeoOverride>,
    /// Two-letter country code of the client, when the edge supplied one.
    pub client_country: Option<Arc<str>>,
}

impl ResolutionQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            gaming: false,
            geo: None,
            client_country: None,
        }
    }

    pub fn with_gaming(mut self, gaming: bool) -> Self {
        self.gaming = gaming;
        self
    }

    pub fn with_geo(mut self, geo: Option<GeoOverride>) -> Self {
        self.geo = geo;
        self
    }

    pub fn with_client_country(mut self, country: Option<&str>) -> Self {
        self.client_country = country.map(|c| Arc::from(c.to_uppercase()));
        self
    }

    pub fn is_from_iran(&self) -> bool {
        self.client_country.as_deref() == Some("IR")
    }
}

/// What actually goes to the upstream for a JSON query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpstreamQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub client_subnet: &'static str,
}

impl UpstreamQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, client_subnet: &'static str) -> Self {
        Self {
            name: name.into(),
            record_type,
            client_subnet,
        }
    }
}
