//! Smart DoH Infrastructure Layer
pub mod dns;
