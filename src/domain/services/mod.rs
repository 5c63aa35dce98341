//! Domain services - Pure business logic operations

mod rule_lookup;

pub use rule_lookup::{applicable_rules, RuleReference};
