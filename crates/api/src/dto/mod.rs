pub mod config;
pub mod dns;
pub mod status;
pub mod usage;

pub use config::{ConfigResponse, RuleCategoryResponse, SubstitutionPoolResponse, UpstreamResponse};
pub use dns::{DnsQueryParams, FullAnswerResponse, SimpleAnswer, SimpleAnswerResponse};
pub use status::{RuleStatistics, StatusResponse};
pub use usage::{UsageExamples, UsageResponse};
