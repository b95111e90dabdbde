use rustc_hash::FxHasher;
use smart_doh_domain::{AddressPool, RecordType, ResolutionAnswer, SiteCategory};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Replaces address records of blocked domains with addresses from the pool.
///
/// The pool entry is picked from a hash of the lower-cased domain, so every
/// record of one answer and every repeat query for that domain land on the
/// same address.
pub struct AnswerRewriter {
    pool: Arc<AddressPool>,
    ttl: u32,
}

impl AnswerRewriter {
    pub fn new(pool: Arc<AddressPool>, ttl: u32) -> Self {
        Self { pool, ttl }
    }

    pub fn pool(&self) -> &AddressPool {
        &self.pool
    }

    pub fn rewrite(
        &self,
        mut answer: ResolutionAnswer,
        category: SiteCategory,
        domain: &str,
    ) -> ResolutionAnswer {
        if category != SiteCategory::Blocked {
            return answer;
        }

        let Some(records) = answer.records.as_mut() else {
            return answer;
        };

        let key = selection_key(domain);
        for record in records.iter_mut().filter(|r| !r.substituted) {
            let replacement = match record.kind() {
                Some(RecordType::A) => self.pool.select_v4(key).to_string(),
                Some(RecordType::AAAA) => match self.pool.select_v6(key) {
                    Some(v6) => v6.to_string(),
                    None => continue,
                },
                _ => continue,
            };

            let original = std::mem::replace(&mut record.data, replacement);
            record.original = Some(original);
            record.substituted = true;
            record.ttl = self.ttl;
        }

        answer
    }
}

fn selection_key(domain: &str) -> u64 {
    let mut hasher = FxHasher::default();
    domain.to_lowercase().hash(&mut hasher);
    hasher.finish()
}
