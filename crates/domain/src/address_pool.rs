use crate::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Substitution targets for blocked-domain address records.
///
/// The IPv4 list must be non-empty; that is checked once here so callers of
/// the selection methods never see an empty pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPool {
    v4: Vec<Ipv4Addr>,
    v6: Vec<Ipv6Addr>,
}

impl AddressPool {
    pub fn new(v4: Vec<Ipv4Addr>, v6: Vec<Ipv6Addr>) -> Result<Self, DomainError> {
        if v4.is_empty() {
            return Err(DomainError::ConfigError(
                "Substitution address pool has no IPv4 addresses".to_string(),
            ));
        }
        Ok(Self { v4, v6 })
    }

    pub fn parse<S: AsRef<str>>(v4: &[S], v6: &[S]) -> Result<Self, DomainError> {
        let v4 = v4
            .iter()
            .map(|s| {
                s.as_ref().trim().parse::<Ipv4Addr>().map_err(|_| {
                    DomainError::ConfigError(format!("Invalid IPv4 pool address: {}", s.as_ref()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let v6 = v6
            .iter()
            .map(|s| {
                s.as_ref().trim().parse::<Ipv6Addr>().map_err(|_| {
                    DomainError::ConfigError(format!("Invalid IPv6 pool address: {}", s.as_ref()))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(v4, v6)
    }

    pub fn v4(&self) -> &[Ipv4Addr] {
        &self.v4
    }

    pub fn v6(&self) -> &[Ipv6Addr] {
        &self.v6
    }

    pub fn select_v4(&self, key: u64) -> Ipv4Addr {
        self.v4[(key % self.v4.len() as u64) as usize]
    }

    pub fn select_v6(&self, key: u64) -> Option<Ipv6Addr> {
        if self.v6.is_empty() {
            return None;
        }
        Some(self.v6[(key % self.v6.len() as u64) as usize])
    }

    pub fn contains(&self, address: &str) -> bool {
        if let Ok(v4) = address.parse::<Ipv4Addr>() {
            return self.v4.contains(&v4);
        }
        address
            .parse::<Ipv6Addr>()
            .map(|v6| self.v6.contains(&v6))
            .unwrap_or(false)
    }
}
