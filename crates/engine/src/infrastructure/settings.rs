//! Engine settings.
//!
//! Read from the environment with defaults; every field can also be set
//! directly when the engine is embedded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming a JSON rule compendium.
pub const RULES_PATH_ENV: &str = "CHARFORGE_RULES_PATH";
/// Environment variable for the rule data cache TTL in seconds.
pub const CACHE_TTL_ENV: &str = "CHARFORGE_RULE_CACHE_TTL_SECS";

const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    /// JSON compendium to load rule data from. `None` uses the SRD preset.
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    /// How long looked-up rule data stays cached. 0 disables caching.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            rules_path: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl EngineSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Blank values count as unset; an unparseable TTL falls back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rules_path = lookup(RULES_PATH_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let cache_ttl_secs = match lookup(CACHE_TTL_ENV).map(|s| s.trim().to_string()) {
            Some(raw) if !raw.is_empty() => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_CACHE_TTL_SECS,
                    "Invalid {}, using default",
                    CACHE_TTL_ENV
                );
                DEFAULT_CACHE_TTL_SECS
            }),
            _ => DEFAULT_CACHE_TTL_SECS,
        };

        Self {
            rules_path,
            cache_ttl_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = EngineSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.cache_ttl_secs, 300);
    }

    #[test]
    fn reads_values() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (RULES_PATH_ENV, " /srv/rules.json "),
            (CACHE_TTL_ENV, "0"),
        ]));
        assert_eq!(settings.rules_path, Some(PathBuf::from("/srv/rules.json")));
        assert_eq!(settings.cache_ttl_secs, 0);
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (RULES_PATH_ENV, "   "),
            (CACHE_TTL_ENV, "soon"),
        ]));
        assert_eq!(settings.rules_path, None);
        assert_eq!(settings.cache_ttl_secs, 300);
    }

    #[test]
    fn deserializes_with_defaults() {
        let settings: EngineSettings = serde_json::from_str(r#"{"rulesPath": "rules.json"}"#).unwrap();
        assert_eq!(settings.rules_path, Some(PathBuf::from("rules.json")));
        assert_eq!(settings.cache_ttl_secs, 300);
    }
}
