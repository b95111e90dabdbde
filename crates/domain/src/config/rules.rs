use crate::rule_set::{
    DomainRuleSet, DEFAULT_BLOCKED_SITES, DEFAULT_GAMING_DOMAINS, DEFAULT_IRANIAN_SITES,
};
use crate::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    #[serde(default = "default_iranian")]
    pub iranian: Vec<String>,

    #[serde(default = "default_blocked")]
    pub blocked: Vec<String>,

    #[serde(default = "default_gaming")]
    pub gaming: Vec<String>,
}

impl RulesConfig {
    pub fn to_rule_set(&self) -> Result<DomainRuleSet, DomainError> {
        DomainRuleSet::new(&self.iranian, &self.blocked, &self.gaming)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            iranian: default_iranian(),
            blocked: default_blocked(),
            gaming: default_gaming(),
        }
    }
}

fn owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_iranian() -> Vec<String> {
    owned_list(DEFAULT_IRANIAN_SITES)
}

fn default_blocked() -> Vec<String> {
    owned_list(DEFAULT_BLOCKED_SITES)
}

fn default_gaming() -> Vec<String> {
    owned_list(DEFAULT_GAMING_DOMAINS)
}
