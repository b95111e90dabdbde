use super::RecordType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the upstream `Answer` array.
///
/// Fields the upstream sends that are not modelled here are kept in `extra`
/// and written back unchanged, so a record that is not rewritten serializes
/// to the same JSON object it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    #[serde(default)]
    pub data: String,

    /// Address the upstream returned before substitution.
    #[serde(rename = "_original", default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,

    #[serde(rename = "_proxied", default, skip_serializing_if = "is_false")]
    pub substituted: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.to_u16(),
            ttl,
            data: data.into(),
            original: None,
            substituted: false,
            extra: Map::new(),
        }
    }

    pub fn kind(&self) -> Option<RecordType> {
        RecordType::from_u16(self.record_type)
    }

    pub fn is_address(&self) -> bool {
        self.kind().is_some_and(|t| t.is_address())
    }
}

/// Upstream JSON DoH document (`application/dns-json`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolutionAnswer {
    #[serde(rename = "Status", default)]
    pub status: u16,

    #[serde(rename = "Answer", default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<AnswerRecord>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResolutionAnswer {
    pub fn new(status: u16, records: Vec<AnswerRecord>) -> Self {
        Self {
            status,
            records: Some(records),
            extra: Map::new(),
        }
    }

    pub fn records(&self) -> &[AnswerRecord] {
        self.records.as_deref().unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    pub fn min_ttl(&self) -> Option<u32> {
        self.records().iter().map(|r| r.ttl).min()
    }

    pub fn substituted_count(&self) -> usize {
        self.records().iter().filter(|r| r.substituted).count()
    }
}
