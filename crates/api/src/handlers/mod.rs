pub mod config;
pub mod dns_query;
pub mod health;
pub mod status;

pub use config::get_config;
pub use dns_query::{dns_query_get, dns_query_post};
pub use health::health_check;
pub use status::get_status;
