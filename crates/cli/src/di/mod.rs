mod upstreams;
mod use_cases;

pub use upstreams::Upstreams;
pub use use_cases::ProxyServices;
