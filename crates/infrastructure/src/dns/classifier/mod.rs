mod rule_set_classifier;
mod suffix_trie;

pub use rule_set_classifier::RuleSetClassifier;
pub use suffix_trie::SuffixTrie;
