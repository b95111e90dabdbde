pub mod classifier;
pub mod upstream;
pub mod wire;

pub use classifier::{RuleSetClassifier, SuffixTrie};
pub use upstream::{build_http_client, CachedUpstream, FailoverUpstream, HttpsDohUpstream};
pub use wire::HickoryWireCodec;
