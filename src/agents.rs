//! Fixed strategies: the rule-based player and a random baseline

pub mod random;
pub mod rule_based;

pub use random::RandomAgent;
pub use rule_based::{RuleBasedAgent, Tactic};
