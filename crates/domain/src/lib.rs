//! Smart DoH Domain Layer
pub mod address_pool;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod routing;
pub mod rule_set;
pub mod site_category;

pub use address_pool::AddressPool;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{ResolutionQuery, UpstreamQuery};
pub use dns_record::{AnswerRecord, RecordType, ResolutionAnswer};
pub use errors::DomainError;
pub use routing::{GeoOverride, RoutingStrategy};
pub use rule_set::DomainRuleSet;
pub use site_category::SiteCategory;
