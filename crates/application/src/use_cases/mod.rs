pub mod config;
pub mod dns;
pub mod status;

pub use config::{CategoryRules, GetRuleSummaryUseCase, RuleSummary};
pub use dns::{
    ProxyMetadata, RelayWireQueryUseCase, RelayedWire, ResolveDnsQueryUseCase, ResolvedQuery,
};
pub use status::{GetServiceStatusUseCase, ServiceStatus, UpstreamHealth};
