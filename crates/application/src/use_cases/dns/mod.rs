mod relay_wire_query;
mod resolve_query;

pub use relay_wire_query::{RelayWireQueryUseCase, RelayedWire, MAX_DNS_MESSAGE_BYTES};
pub use resolve_query::{ProxyMetadata, ResolveDnsQueryUseCase, ResolvedQuery};
