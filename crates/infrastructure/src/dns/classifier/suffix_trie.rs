use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    rule_mask: u8,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FxBuildHasher),
            rule_mask: 0,
        }
    }
}

/// Label-reversed trie of domain suffixes.
///
/// A rule `example.com` covers `example.com` itself and every name below it.
/// Matching is per label, so `notexample.com` never hits.
#[derive(Default)]
pub struct SuffixTrie {
    root: TrieNode,
    len: usize,
}

impl SuffixTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// `suffix` must already be normalized (lower-case, no leading dot).
    pub fn insert(&mut self, suffix: &str, mask: u8) {
        let mut node = &mut self.root;
        for label in suffix.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        if node.rule_mask & mask != mask {
            self.len += 1;
        }
        node.rule_mask |= mask;
    }

    /// ORs the masks of every rule that is a suffix of `domain`.
    #[inline]
    pub fn lookup(&self, domain: &str) -> u8 {
        let labels: SmallVec<[&str; 8]> = domain.split('.').rev().collect();
        let mut node = &self.root;
        let mut result: u8 = 0;

        for label in labels {
            match node.children.get(label) {
                Some(child) => {
                    result |= child.rule_mask;
                    node = child;
                }
                None => break,
            }
        }

        result
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
