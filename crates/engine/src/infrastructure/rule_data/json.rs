//! JSON compendium rule data provider.
//!
//! Loads every race, class and background from a single document:
//!
//! ```json
//! { "races": [...], "classes": [...], "backgrounds": [...] }
//! ```
//!
//! Missing sections default to empty.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use charforge_domain::{BackgroundData, ClassData, RaceData};

use super::InMemoryRuleData;
use crate::infrastructure::ports::{RuleDataError, RuleDataProvider};

/// The on-disk compendium document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleCompendium {
    #[serde(default)]
    pub races: Vec<RaceData>,
    #[serde(default)]
    pub classes: Vec<ClassData>,
    #[serde(default)]
    pub backgrounds: Vec<BackgroundData>,
}

/// Rule data loaded once from a JSON compendium.
#[derive(Debug, Clone)]
pub struct JsonRuleData {
    data: InMemoryRuleData,
}

impl JsonRuleData {
    /// Parse a compendium document.
    pub fn parse(content: &str) -> Result<Self, RuleDataError> {
        let compendium: RuleCompendium = serde_json::from_str(content)
            .map_err(|e| RuleDataError::serialization(format!("Invalid rule compendium: {}", e)))?;
        Ok(Self::from_compendium(compendium))
    }

    /// Read and parse a compendium file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleDataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RuleDataError::unavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn from_compendium(compendium: RuleCompendium) -> Self {
        tracing::debug!(
            races = compendium.races.len(),
            classes = compendium.classes.len(),
            backgrounds = compendium.backgrounds.len(),
            "Loaded rule compendium"
        );

        let data = compendium
            .races
            .into_iter()
            .fold(InMemoryRuleData::new(), InMemoryRuleData::with_race);
        let data = compendium
            .classes
            .into_iter()
            .fold(data, InMemoryRuleData::with_class);
        let data = compendium
            .backgrounds
            .into_iter()
            .fold(data, InMemoryRuleData::with_background);

        Self { data }
    }
}

impl RuleDataProvider for JsonRuleData {
    fn get_race_data(&self, id: &str) -> Result<RaceData, RuleDataError> {
        self.data.get_race_data(id)
    }

    fn get_class_data(&self, id: &str) -> Result<ClassData, RuleDataError> {
        self.data.get_class_data(id)
    }

    fn get_background_data(&self, id: &str) -> Result<BackgroundData, RuleDataError> {
        self.data.get_background_data(id)
    }
}
