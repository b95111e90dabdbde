use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a queried domain. Variants are listed in match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteCategory {
    Iranian,
    Blocked,
    Gaming,
    #[default]
    Normal,
}

impl SiteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteCategory::Iranian => "iranian",
            SiteCategory::Blocked => "blocked",
            SiteCategory::Gaming => "gaming",
            SiteCategory::Normal => "normal",
        }
    }

    /// Bit used by rule matchers to record which categories a name hit.
    pub fn mask(&self) -> u8 {
        match self {
            SiteCategory::Iranian => 0b0001,
            SiteCategory::Blocked => 0b0010,
            SiteCategory::Gaming => 0b0100,
            SiteCategory::Normal => 0,
        }
    }

    /// Resolves a set of matched category bits to the highest-priority category.
    pub fn from_mask(mask: u8) -> Self {
        Self::ruled()
            .iter()
            .copied()
            .find(|c| mask & c.mask() != 0)
            .unwrap_or(SiteCategory::Normal)
    }

    /// Categories that are backed by a rule list, in priority order.
    pub fn ruled() -> &'static [SiteCategory] {
        &[SiteCategory::Iranian, SiteCategory::Blocked, SiteCategory::Gaming]
    }

    pub fn cache_max_age(&self) -> u32 {
        match self {
            SiteCategory::Gaming => 60,
            SiteCategory::Iranian => 600,
            SiteCategory::Blocked | SiteCategory::Normal => 300,
        }
    }
}

impl fmt::Display for SiteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
