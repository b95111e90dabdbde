use crate::{AddressPool, DomainError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubstitutionConfig {
    #[serde(default = "default_ipv4_pool")]
    pub ipv4_pool: Vec<String>,

    /// AAAA records of blocked domains pass through untouched when empty.
    #[serde(default = "default_ipv6_pool")]
    pub ipv6_pool: Vec<String>,

    /// TTL stamped on substituted records.
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl SubstitutionConfig {
    pub fn to_address_pool(&self) -> Result<AddressPool, DomainError> {
        AddressPool::parse(&self.ipv4_pool, &self.ipv6_pool)
    }
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            ipv4_pool: default_ipv4_pool(),
            ipv6_pool: default_ipv6_pool(),
            ttl: default_ttl(),
        }
    }
}

fn default_ipv4_pool() -> Vec<String> {
    [
        "104.16.132.229",
        "104.16.133.229",
        "172.67.69.9",
        "172.67.70.9",
        "104.21.48.39",
        "172.67.177.111",
        "104.16.124.96",
        "172.67.161.180",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_ipv6_pool() -> Vec<String> {
    vec![
        "2606:4700::6810:84e5".to_string(),
        "2606:4700::6810:85e5".to_string(),
    ]
}

fn default_ttl() -> u32 {
    300
}
