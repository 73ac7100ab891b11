//! Port traits for infrastructure boundaries.
//!
//! The engine has a single port: the rule data source. Everything else is
//! concrete types.

mod error;
mod rule_data;

pub use error::{RuleDataError, RuleKind};
pub use rule_data::RuleDataProvider;

#[cfg(test)]
pub use rule_data::MockRuleDataProvider;
