mod get_rule_summary;

pub use get_rule_summary::{CategoryRules, GetRuleSummaryUseCase, RuleSummary};
