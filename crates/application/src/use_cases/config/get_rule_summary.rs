use serde::Serialize;
use smart_doh_domain::{AddressPool, DomainRuleSet, SiteCategory};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRules {
    pub category: SiteCategory,
    pub count: usize,
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub categories: Vec<CategoryRules>,
    pub total_rules: usize,
    pub ipv4_pool: Vec<String>,
    pub ipv6_pool: Vec<String>,
}

pub struct GetRuleSummaryUseCase {
    rules: Arc<DomainRuleSet>,
    pool: Arc<AddressPool>,
}

impl GetRuleSummaryUseCase {
    pub fn new(rules: Arc<DomainRuleSet>, pool: Arc<AddressPool>) -> Self {
        Self { rules, pool }
    }

    pub fn execute(&self) -> RuleSummary {
        let categories = SiteCategory::ruled()
            .iter()
            .map(|&category| {
                let domains = self.rules.rules(category).to_vec();
                CategoryRules {
                    category,
                    count: domains.len(),
                    domains,
                }
            })
            .collect();

        RuleSummary {
            categories,
            total_rules: self.rules.total_rules(),
            ipv4_pool: self.pool.v4().iter().map(|a| a.to_string()).collect(),
            ipv6_pool: self.pool.v6().iter().map(|a| a.to_string()).collect(),
        }
    }
}
