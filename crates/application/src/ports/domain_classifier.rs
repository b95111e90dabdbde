use smart_doh_domain::SiteCategory;

pub trait DomainClassifierPort: Send + Sync {
    /// Total over all inputs; names no rule covers are `Normal`.
    fn classify(&self, domain: &str) -> SiteCategory;

    fn rule_count(&self) -> usize;
}
