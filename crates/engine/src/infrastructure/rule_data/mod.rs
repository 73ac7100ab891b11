//! Rule data providers.
//!
//! - [`InMemoryRuleData`] - fixed tables, used for tests and as the SRD preset
//! - [`JsonRuleData`] - a compendium loaded from a JSON file
//! - [`CachedRuleData`] - TTL cache wrapped around any other provider

mod cached;
mod in_memory;
mod json;

pub use cached::CachedRuleData;
pub use in_memory::InMemoryRuleData;
pub use json::{JsonRuleData, RuleCompendium};

use std::sync::Arc;
use std::time::Duration;

use super::ports::{RuleDataError, RuleDataProvider};
use super::settings::EngineSettings;

/// Build the rule data provider described by `settings`.
///
/// Loads the JSON compendium when a rules path is configured and falls back
/// to the SRD preset otherwise. A non-zero cache TTL wraps the result in a
/// [`CachedRuleData`].
pub fn build_rule_data_provider(
    settings: &EngineSettings,
) -> Result<Arc<dyn RuleDataProvider>, RuleDataError> {
    let base: Arc<dyn RuleDataProvider> = match &settings.rules_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading rule data compendium");
            Arc::new(JsonRuleData::from_path(path)?)
        }
        None => {
            tracing::info!("No rules path configured, using SRD rule data");
            Arc::new(InMemoryRuleData::srd())
        }
    };

    if settings.cache_ttl_secs == 0 {
        return Ok(base);
    }

    Ok(Arc::new(CachedRuleData::new(
        base,
        Duration::from_secs(settings.cache_ttl_secs),
    )))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_settings_use_srd() {
        let provider = build_rule_data_provider(&EngineSettings::default()).unwrap();
        assert_eq!(provider.get_class_data("fighter").unwrap().hit_die, "1d10");
    }

    #[test]
    fn rules_path_loads_compendium() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"classes": [{{"id": "warlock", "name": "Warlock", "hitDie": "1d8"}}]}}"#
        )
        .unwrap();

        let settings = EngineSettings {
            rules_path: Some(file.path().to_path_buf()),
            cache_ttl_secs: 0,
        };
        let provider = build_rule_data_provider(&settings).unwrap();
        assert_eq!(provider.get_class_data("warlock").unwrap().name, "Warlock");
        assert!(provider.get_class_data("fighter").unwrap_err().is_not_found());
    }

    #[test]
    fn missing_compendium_is_unavailable() {
        let settings = EngineSettings {
            rules_path: Some("/definitely/not/here.json".into()),
            cache_ttl_secs: 60,
        };
        let err = build_rule_data_provider(&settings).err().unwrap();
        assert!(matches!(err, RuleDataError::Unavailable(_)));
    }
}
