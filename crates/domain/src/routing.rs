use crate::SiteCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subnet hint that biases upstream geolocation toward Iranian networks.
pub const IRAN_CLIENT_SUBNET: &str = "5.63.13.0/24";
/// Subnet hint for resolving as a client outside Iran.
pub const FOREIGN_CLIENT_SUBNET: &str = "185.3.124.0/24";
/// Anonymizing hint: asks the upstream not to use client location at all.
pub const ANONYMOUS_CLIENT_SUBNET: &str = "0.0.0.0/0";

/// Explicit `geo=` override supplied by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoOverride {
    Iran,
    Abroad,
}

impl FromStr for GeoOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iran" => Ok(GeoOverride::Iran),
            "abroad" => Ok(GeoOverride::Abroad),
            _ => Err(format!("Unknown geo override: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingStrategy {
    IranDirect,
    IranEdge,
    ForeignEdge,
    GamingOptimized,
    RegionalGaming,
    SmartRouting,
    RegionalEdge,
}

impl RoutingStrategy {
    pub fn select(
        category: SiteCategory,
        geo: Option<GeoOverride>,
        from_iran: bool,
        gaming: bool,
    ) -> Self {
        match geo {
            Some(GeoOverride::Iran) => return RoutingStrategy::IranEdge,
            Some(GeoOverride::Abroad) => return RoutingStrategy::ForeignEdge,
            None => {}
        }

        match category {
            SiteCategory::Iranian if from_iran => RoutingStrategy::IranDirect,
            SiteCategory::Iranian => RoutingStrategy::RegionalEdge,
            SiteCategory::Blocked => RoutingStrategy::ForeignEdge,
            SiteCategory::Gaming if from_iran => RoutingStrategy::GamingOptimized,
            SiteCategory::Gaming => RoutingStrategy::RegionalGaming,
            SiteCategory::Normal if from_iran && gaming => RoutingStrategy::GamingOptimized,
            SiteCategory::Normal if from_iran => RoutingStrategy::SmartRouting,
            SiteCategory::Normal => RoutingStrategy::RegionalEdge,
        }
    }

    /// EDNS client-subnet hint sent upstream. Best effort only.
    pub fn client_subnet(&self, from_iran: bool) -> &'static str {
        match self {
            RoutingStrategy::IranDirect | RoutingStrategy::IranEdge => IRAN_CLIENT_SUBNET,
            RoutingStrategy::ForeignEdge => FOREIGN_CLIENT_SUBNET,
            RoutingStrategy::GamingOptimized if from_iran => IRAN_CLIENT_SUBNET,
            _ => ANONYMOUS_CLIENT_SUBNET,
        }
    }

    pub fn all() -> &'static [RoutingStrategy] {
        &[
            RoutingStrategy::IranDirect,
            RoutingStrategy::IranEdge,
            RoutingStrategy::ForeignEdge,
            RoutingStrategy::GamingOptimized,
            RoutingStrategy::RegionalGaming,
            RoutingStrategy::SmartRouting,
            RoutingStrategy::RegionalEdge,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingStrategy::IranDirect => "iran_direct",
            RoutingStrategy::IranEdge => "iran_edge",
            RoutingStrategy::ForeignEdge => "foreign_edge",
            RoutingStrategy::GamingOptimized => "gaming_optimized",
            RoutingStrategy::RegionalGaming => "regional_gaming",
            RoutingStrategy::SmartRouting => "smart_routing",
            RoutingStrategy::RegionalEdge => "regional_edge",
        }
    }
}

impl fmt::Display for RoutingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
