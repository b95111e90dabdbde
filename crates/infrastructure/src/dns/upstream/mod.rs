//! DoH upstream adapters
//!
//! `HttpsDohUpstream` talks to one provider. `FailoverUpstream` retries once on
//! a second provider, and `CachedUpstream` keeps recent JSON answers in memory.
//! They all implement `DohUpstream` and stack in that order.

mod cached;
mod failover;
mod https;

pub use cached::CachedUpstream;
pub use failover::FailoverUpstream;
pub use https::{build_http_client, HttpsDohUpstream};
