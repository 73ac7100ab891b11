//! Rule data port.

use charforge_domain::{BackgroundData, ClassData, RaceData};

use super::error::RuleDataError;

// =============================================================================
// Rule Data Source
// =============================================================================

/// Read-only access to the ruleset records character creation depends on.
///
/// Calls are synchronous and may block. Implementations own any timeout,
/// retry or caching policy; a single engine operation may look up the same
/// ID more than once (wrap the source in `CachedRuleData` to avoid refetching).
#[cfg_attr(test, mockall::automock)]
pub trait RuleDataProvider: Send + Sync {
    /// Resolve a race, including its subrace list.
    fn get_race_data(&self, id: &str) -> Result<RaceData, RuleDataError>;
    fn get_class_data(&self, id: &str) -> Result<ClassData, RuleDataError>;
    fn get_background_data(&self, id: &str) -> Result<BackgroundData, RuleDataError>;
}
