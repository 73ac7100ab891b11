//! Character creation use cases.
//!
//! Validates each section of a character draft against rule data, composes
//! those checks into one report per draft, and computes derived statistics
//! for drafts and finished characters.

mod ability_scores;
mod background;
mod choices;
mod completeness;
mod draft;
mod error;
mod skills;
mod stats;

#[cfg(test)]
mod tests;

pub use ability_scores::validate_ability_scores;
pub use completeness::check_completeness;
pub use error::CharacterCreationError;
pub use stats::{StatInputs, StatSubject};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use charforge_domain::{Ability, CharacterDraft, HitDie, ValidationOutcome};

use crate::infrastructure::ports::RuleDataProvider;

// =============================================================================
// Result Types
// =============================================================================

/// Result of validating a race (and optional subrace) choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceValidation {
    pub outcome: ValidationOutcome,
    /// Race traits followed by subrace traits.
    pub traits: Vec<String>,
    /// Race bonuses with subrace bonuses added on top.
    pub ability_bonuses: BTreeMap<Ability, i32>,
}

/// Result of validating a class choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassValidation {
    pub outcome: ValidationOutcome,
    /// `None` when the class could not be resolved.
    pub hit_die: Option<HitDie>,
    pub primary_abilities: Vec<Ability>,
    pub saving_throws: Vec<Ability>,
    /// Number of skills to pick from `available_skills`.
    pub skill_choice_count: u8,
    pub available_skills: Vec<String>,
}

/// Result of validating a background choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundValidation {
    pub outcome: ValidationOutcome,
    pub skill_proficiencies: Vec<String>,
    pub language_count: u8,
    pub starting_equipment: Vec<String>,
}

/// A skill as shown to a player picking proficiencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillOption {
    pub id: String,
    pub name: String,
    /// Governing ability; `None` for identifiers outside the fixed skill list.
    pub ability: Option<Ability>,
}

/// Skill pools for a class/background pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSkills {
    /// Skills the class lets the player choose from
    pub class_skills: Vec<SkillOption>,
    /// Skills the background grants automatically
    pub background_skills: Vec<SkillOption>,
}

macro_rules! impl_is_valid {
    ($($ty:ty),*) => {
        $(impl $ty {
            #[inline]
            pub fn is_valid(&self) -> bool {
                self.outcome.is_valid()
            }
        })*
    };
}

impl_is_valid!(RaceValidation, ClassValidation, BackgroundValidation);

// =============================================================================
// Use Case
// =============================================================================

/// Character creation validation and calculation.
///
/// Holds no state besides the rule data source; every operation may run
/// concurrently for different drafts.
#[derive(Clone)]
pub struct CharacterCreation {
    rule_data: Arc<dyn RuleDataProvider>,
}

impl CharacterCreation {
    pub fn new(rule_data: Arc<dyn RuleDataProvider>) -> Self {
        Self { rule_data }
    }

    /// Resolve and attach rule data for every ID the draft references.
    ///
    /// Data already attached for the current ID is not fetched again. Returns
    /// the selected skills dropped because the background grants them.
    ///
    /// # Errors
    ///
    /// Provider failures are returned as-is; nothing is attached for the
    /// section that failed.
    pub fn hydrate_draft(
        &self,
        draft: &mut CharacterDraft,
    ) -> Result<Vec<String>, CharacterCreationError> {
        if let (Some(race_id), None) = (draft.race_id(), draft.race_data()) {
            let race = self.rule_data.get_race_data(race_id)?;
            draft.attach_race_data(race)?;
        }
        if let (Some(class_id), None) = (draft.class_id(), draft.class_data()) {
            let class = self.rule_data.get_class_data(class_id)?;
            draft.attach_class_data(class)?;
        }

        let mut pruned = Vec::new();
        if let (Some(background_id), None) = (draft.background_id(), draft.background_data()) {
            let background = self.rule_data.get_background_data(background_id)?;
            pruned = draft.attach_background_data(background)?;
        }

        if !pruned.is_empty() {
            tracing::info!(
                draft_id = %draft.id(),
                pruned = ?pruned,
                "Removed selected skills already granted by background"
            );
        }
        Ok(pruned)
    }
}

/// Trimmed ID, or `None` when blank.
fn present(id: &str) -> Option<&str> {
    let id = id.trim();
    (!id.is_empty()).then_some(id)
}
