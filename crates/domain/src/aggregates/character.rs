//! Character aggregate - a finalized character
//!
//! Built from a complete, hydrated draft. Unlike the draft, every section is
//! present and bounded, so downstream code never handles missing data.

use serde::{Deserialize, Serialize};

use super::CharacterDraft;
use crate::entities::{BackgroundData, ClassData, RaceData};
use crate::error::DomainError;
use crate::game_systems::dnd5e::{CHARACTER_SCORE_MAX, CHARACTER_SCORE_MIN, MAX_LEVEL, MIN_LEVEL};
use crate::ids::CharacterId;
use crate::value_objects::{AbilityScores, CharacterName};

/// A finalized character.
///
/// # Invariants
///
/// - `level` is within 1-20
/// - every ability score is within 3-20
/// - race, class and background data are resolved and match their IDs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    level: u8,
    subrace_id: Option<String>,
    ability_scores: AbilityScores,
    skill_proficiencies: Vec<String>,
    race: RaceData,
    class: ClassData,
    background: BackgroundData,
}

impl Character {
    /// Finalize a draft at the given level.
    ///
    /// # Errors
    ///
    /// - `DomainError::MissingSection` if a section or its hydrated data is absent,
    ///   or no skills are selected while the class requires picks
    /// - `DomainError::Validation` if the level or a score is out of bounds
    pub fn from_draft(draft: CharacterDraft, level: u8) -> Result<Self, DomainError> {
        validate_level(level)?;

        let name = draft
            .name()
            .cloned()
            .ok_or(DomainError::missing_section("name"))?;
        let ability_scores = *draft
            .ability_scores()
            .ok_or(DomainError::missing_section("ability_scores"))?;
        validate_scores(&ability_scores)?;

        let race = draft
            .race_data()
            .cloned()
            .ok_or(DomainError::missing_section("race"))?;
        let class = draft
            .class_data()
            .cloned()
            .ok_or(DomainError::missing_section("class"))?;
        let background = draft
            .background_data()
            .cloned()
            .ok_or(DomainError::missing_section("background"))?;
        if draft.selected_skills().is_empty() && class.skill_choice_count > 0 {
            return Err(DomainError::missing_section("skills"));
        }

        if let Some(subrace_id) = draft.subrace_id() {
            if race.subrace(subrace_id).is_none() {
                return Err(DomainError::validation(format!(
                    "Subrace '{}' does not belong to race '{}'",
                    subrace_id, race.id
                )));
            }
        }

        Ok(Self {
            id: CharacterId::new(),
            name,
            level,
            subrace_id: draft.subrace_id().map(str::to_string),
            ability_scores,
            skill_proficiencies: draft.selected_skills().to_vec(),
            race,
            class,
            background,
        })
    }

    /// Change the character's level.
    pub fn set_level(&mut self, level: u8) -> Result<(), DomainError> {
        validate_level(level)?;
        self.level = level;
        Ok(())
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn race_id(&self) -> &str {
        &self.race.id
    }

    pub fn subrace_id(&self) -> Option<&str> {
        self.subrace_id.as_deref()
    }

    pub fn class_id(&self) -> &str {
        &self.class.id
    }

    pub fn background_id(&self) -> &str {
        &self.background.id
    }

    pub fn ability_scores(&self) -> &AbilityScores {
        &self.ability_scores
    }

    /// Skills chosen at creation (background grants are not included).
    pub fn skill_proficiencies(&self) -> &[String] {
        &self.skill_proficiencies
    }

    pub fn race(&self) -> &RaceData {
        &self.race
    }

    pub fn class(&self) -> &ClassData {
        &self.class
    }

    pub fn background(&self) -> &BackgroundData {
        &self.background
    }
}

fn validate_level(level: u8) -> Result<(), DomainError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(DomainError::validation(format!(
            "Level must be between {} and {}, got {}",
            MIN_LEVEL, MAX_LEVEL, level
        )));
    }
    Ok(())
}

fn validate_scores(scores: &AbilityScores) -> Result<(), DomainError> {
    for (ability, score) in scores.iter() {
        if !(CHARACTER_SCORE_MIN..=CHARACTER_SCORE_MAX).contains(&score) {
            return Err(DomainError::validation(format!(
                "{} must be between {} and {}, got {}",
                ability.display_name(),
                CHARACTER_SCORE_MIN,
                CHARACTER_SCORE_MAX,
                score
            )));
        }
    }
    Ok(())
}
