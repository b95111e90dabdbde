use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use smart_doh_application::ports::WireCodecPort;
use smart_doh_domain::{DomainError, RecordType};
use std::str::FromStr;

/// RFC 8484 asks DoH clients to use ID 0 so identical queries cache alike.
const DOH_MESSAGE_ID: u16 = 0;

pub struct HickoryWireCodec;

impl WireCodecPort for HickoryWireCodec {
    fn build_query(&self, domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidInput(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(hickory_proto::rr::RecordType::from(record_type.to_u16()));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(DOH_MESSAGE_ID, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidInput(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }

    fn question_name(&self, message: &[u8]) -> Option<String> {
        let message = Message::from_vec(message).ok()?;
        let query = message.queries().first()?;
        let name = query.name().to_utf8();
        let name = name.trim_end_matches('.');
        (!name.is_empty()).then(|| name.to_string())
    }
}
