//! Caching wrapper for rule data providers.

use std::sync::Arc;
use std::time::Duration;

use charforge_domain::{BackgroundData, ClassData, RaceData};

use crate::infrastructure::cache::TtlCache;
use crate::infrastructure::ports::{RuleDataError, RuleDataProvider};

/// Wraps a provider and keeps successful lookups for a fixed TTL.
///
/// Failures are never cached, so an unavailable source is retried on the
/// next call.
pub struct CachedRuleData {
    inner: Arc<dyn RuleDataProvider>,
    races: TtlCache<String, RaceData>,
    classes: TtlCache<String, ClassData>,
    backgrounds: TtlCache<String, BackgroundData>,
}

impl CachedRuleData {
    pub fn new(inner: Arc<dyn RuleDataProvider>, ttl: Duration) -> Self {
        Self {
            inner,
            races: TtlCache::new(ttl),
            classes: TtlCache::new(ttl),
            backgrounds: TtlCache::new(ttl),
        }
    }

    /// Drop expired entries from every table.
    pub fn cleanup_expired(&self) -> usize {
        self.races.cleanup_expired() + self.classes.cleanup_expired() + self.backgrounds.cleanup_expired()
    }
}

fn cached<V: Clone>(
    cache: &TtlCache<String, V>,
    id: &str,
    fetch: impl FnOnce() -> Result<V, RuleDataError>,
) -> Result<V, RuleDataError> {
    let key = id.to_string();
    if let Some(value) = cache.get(&key) {
        return Ok(value);
    }
    let value = fetch()?;
    cache.insert(key, value.clone());
    Ok(value)
}

impl RuleDataProvider for CachedRuleData {
    fn get_race_data(&self, id: &str) -> Result<RaceData, RuleDataError> {
        cached(&self.races, id, || self.inner.get_race_data(id))
    }

    fn get_class_data(&self, id: &str) -> Result<ClassData, RuleDataError> {
        cached(&self.classes, id, || self.inner.get_class_data(id))
    }

    fn get_background_data(&self, id: &str) -> Result<BackgroundData, RuleDataError> {
        cached(&self.backgrounds, id, || self.inner.get_background_data(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockRuleDataProvider, RuleKind};

    #[test]
    fn successful_lookups_hit_the_source_once() {
        let mut mock = MockRuleDataProvider::new();
        mock.expect_get_class_data()
            .withf(|id| id == "fighter")
            .times(1)
            .returning(|_| Ok(ClassData::new("fighter", "Fighter", "1d10")));

        let cached = CachedRuleData::new(Arc::new(mock), Duration::from_secs(60));
        assert_eq!(cached.get_class_data("fighter").unwrap().hit_die, "1d10");
        assert_eq!(cached.get_class_data("fighter").unwrap().hit_die, "1d10");
    }

    #[test]
    fn failures_are_not_cached() {
        let mut mock = MockRuleDataProvider::new();
        mock.expect_get_race_data()
            .times(2)
            .returning(|id| Err(RuleDataError::not_found(RuleKind::Race, id)));

        let cached = CachedRuleData::new(Arc::new(mock), Duration::from_secs(60));
        assert!(cached.get_race_data("lizardfolk").is_err());
        assert!(cached.get_race_data("lizardfolk").is_err());
    }

    #[test]
    fn tables_are_independent() {
        let mut mock = MockRuleDataProvider::new();
        mock.expect_get_background_data()
            .times(1)
            .returning(|_| Ok(BackgroundData::new("sage", "Sage")));
        mock.expect_get_race_data()
            .times(1)
            .returning(|_| Ok(RaceData::new("sage", "Sage Folk")));

        let cached = CachedRuleData::new(Arc::new(mock), Duration::from_secs(60));
        assert_eq!(cached.get_background_data("sage").unwrap().name, "Sage");
        assert_eq!(cached.get_race_data("sage").unwrap().name, "Sage Folk");
        assert_eq!(cached.get_background_data("sage").unwrap().name, "Sage");
    }
}
