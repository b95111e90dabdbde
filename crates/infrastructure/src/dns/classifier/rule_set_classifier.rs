use super::SuffixTrie;
use smart_doh_application::ports::DomainClassifierPort;
use smart_doh_domain::{DomainRuleSet, SiteCategory};
use tracing::info;

pub struct RuleSetClassifier {
    trie: SuffixTrie,
}

impl RuleSetClassifier {
    pub fn new(rules: &DomainRuleSet) -> Self {
        let mut trie = SuffixTrie::new();
        for &category in SiteCategory::ruled() {
            for rule in rules.rules(category) {
                trie.insert(rule, category.mask());
            }
        }

        info!(rules = trie.len(), "Domain classifier compiled");
        Self { trie }
    }
}

impl DomainClassifierPort for RuleSetClassifier {
    fn classify(&self, domain: &str) -> SiteCategory {
        let domain = domain.trim_end_matches('.').to_lowercase();
        if domain.is_empty() {
            return SiteCategory::Normal;
        }
        SiteCategory::from_mask(self.trie.lookup(&domain))
    }

    fn rule_count(&self) -> usize {
        self.trie.len()
    }
}
