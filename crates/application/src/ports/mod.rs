mod domain_classifier;
mod doh_upstream;
mod wire_codec;

pub use domain_classifier::DomainClassifierPort;
pub use doh_upstream::{DohUpstream, UpstreamReply};
pub use wire_codec::WireCodecPort;
