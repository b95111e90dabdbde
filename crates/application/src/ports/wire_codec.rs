use smart_doh_domain::{DomainError, RecordType};

pub trait WireCodecPort: Send + Sync {
    fn build_query(&self, name: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError>;

    /// First question name of a wire message, without the trailing dot.
    /// `None` when the message does not parse.
    fn question_name(&self, message: &[u8]) -> Option<String>;
}
