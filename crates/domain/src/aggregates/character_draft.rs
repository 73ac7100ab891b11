//! CharacterDraft aggregate - a character still being built
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: sections change only through their setters
//! - **One section at a time**: name, race, class, background, ability scores,
//!   skills are set independently and may be left empty
//! - **Hydration cache**: resolved rule data can be attached so later steps do
//!   not refetch it; changing an ID drops the stale copy

use serde::{Deserialize, Serialize};

use crate::entities::{BackgroundData, ClassData, RaceData};
use crate::error::DomainError;
use crate::ids::DraftId;
use crate::value_objects::{normalize_skill_id, AbilityScoreMethod, AbilityScores, CharacterName};

/// An in-progress character.
///
/// # Invariants
///
/// - IDs are never stored as empty strings; blank input clears the section
/// - `selected_skills` never contains a skill granted by the attached
///   background data (attaching the background prunes such selections)
/// - Attached rule data always matches the currently selected ID
///
/// Deserialized drafts go through the same setters, so stored data that breaks
/// these rules is normalized or rejected on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCharacterDraft")]
pub struct CharacterDraft {
    id: DraftId,
    name: Option<CharacterName>,
    race_id: Option<String>,
    subrace_id: Option<String>,
    class_id: Option<String>,
    background_id: Option<String>,
    ability_scores: Option<AbilityScores>,
    ability_score_method: Option<AbilityScoreMethod>,
    selected_skills: Vec<String>,

    // Hydrated rule data
    race_data: Option<RaceData>,
    class_data: Option<ClassData>,
    background_data: Option<BackgroundData>,
}

/// Wire shape of a draft before its invariants are re-established.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCharacterDraft {
    id: DraftId,
    name: Option<CharacterName>,
    race_id: Option<String>,
    subrace_id: Option<String>,
    class_id: Option<String>,
    background_id: Option<String>,
    ability_scores: Option<AbilityScores>,
    ability_score_method: Option<AbilityScoreMethod>,
    #[serde(default)]
    selected_skills: Vec<String>,
    race_data: Option<RaceData>,
    class_data: Option<ClassData>,
    background_data: Option<BackgroundData>,
}

impl TryFrom<RawCharacterDraft> for CharacterDraft {
    type Error = DomainError;

    fn try_from(raw: RawCharacterDraft) -> Result<Self, Self::Error> {
        let mut draft = Self::with_id(raw.id);
        draft.name = raw.name;
        draft.set_race(raw.race_id.unwrap_or_default(), raw.subrace_id);
        draft.set_class(raw.class_id.unwrap_or_default());
        draft.set_background(raw.background_id.unwrap_or_default());
        draft.ability_scores = raw.ability_scores;
        draft.ability_score_method = raw.ability_score_method;
        draft.selected_skills = raw.selected_skills.into_iter().filter_map(non_blank).collect();

        if let Some(data) = raw.race_data {
            draft.attach_race_data(data)?;
        }
        if let Some(data) = raw.class_data {
            draft.attach_class_data(data)?;
        }
        if let Some(data) = raw.background_data {
            draft.attach_background_data(data)?;
        }
        Ok(draft)
    }
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl CharacterDraft {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty draft with a fresh ID.
    pub fn new() -> Self {
        Self::with_id(DraftId::new())
    }

    /// Create an empty draft with a known ID (e.g., when the caller owns
    /// identity).
    pub fn with_id(id: DraftId) -> Self {
        Self {
            id,
            name: None,
            race_id: None,
            subrace_id: None,
            class_id: None,
            background_id: None,
            ability_scores: None,
            ability_score_method: None,
            selected_skills: Vec::new(),
            race_data: None,
            class_data: None,
            background_data: None,
        }
    }

    // =========================================================================
    // Builder (partial initial data)
    // =========================================================================

    pub fn with_name(mut self, name: CharacterName) -> Self {
        self.set_name(name);
        self
    }

    pub fn with_race(mut self, race_id: impl Into<String>, subrace_id: Option<String>) -> Self {
        self.set_race(race_id, subrace_id);
        self
    }

    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.set_class(class_id);
        self
    }

    pub fn with_background(mut self, background_id: impl Into<String>) -> Self {
        self.set_background(background_id);
        self
    }

    pub fn with_ability_scores(mut self, scores: AbilityScores, method: AbilityScoreMethod) -> Self {
        self.set_ability_scores(scores, method);
        self
    }

    pub fn with_skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.set_skills(skills);
        self
    }

    // =========================================================================
    // Section Mutations
    // =========================================================================

    pub fn set_name(&mut self, name: CharacterName) {
        self.name = Some(name);
    }

    pub fn clear_name(&mut self) {
        self.name = None;
    }

    /// Select a race (and optionally a subrace). A blank race ID clears both.
    pub fn set_race(&mut self, race_id: impl Into<String>, subrace_id: Option<String>) {
        let race_id = non_blank(race_id);
        if race_id != self.race_id {
            self.race_data = None;
        }
        self.subrace_id = race_id.as_ref().and(subrace_id.and_then(non_blank));
        self.race_id = race_id;
    }

    pub fn set_class(&mut self, class_id: impl Into<String>) {
        let class_id = non_blank(class_id);
        if class_id != self.class_id {
            self.class_data = None;
        }
        self.class_id = class_id;
    }

    pub fn set_background(&mut self, background_id: impl Into<String>) {
        let background_id = non_blank(background_id);
        if background_id != self.background_id {
            self.background_data = None;
        }
        self.background_id = background_id;
    }

    pub fn set_ability_scores(&mut self, scores: AbilityScores, method: AbilityScoreMethod) {
        self.ability_scores = Some(scores);
        self.ability_score_method = Some(method);
    }

    pub fn clear_ability_scores(&mut self) {
        self.ability_scores = None;
        self.ability_score_method = None;
    }

    /// Replace the selected class skills.
    ///
    /// Blank entries are dropped. If background data is attached, skills it
    /// already grants are removed and returned.
    pub fn set_skills<S: Into<String>>(&mut self, skills: impl IntoIterator<Item = S>) -> Vec<String> {
        self.selected_skills = skills.into_iter().filter_map(non_blank).collect();
        self.prune_background_skills()
    }

    // =========================================================================
    // Hydration
    // =========================================================================

    /// Attach resolved race data for the selected race.
    pub fn attach_race_data(&mut self, data: RaceData) -> Result<(), DomainError> {
        ensure_matches("race", self.race_id.as_deref(), &data.id)?;
        self.race_data = Some(data);
        Ok(())
    }

    /// Attach resolved class data for the selected class.
    pub fn attach_class_data(&mut self, data: ClassData) -> Result<(), DomainError> {
        ensure_matches("class", self.class_id.as_deref(), &data.id)?;
        self.class_data = Some(data);
        Ok(())
    }

    /// Attach resolved background data for the selected background.
    ///
    /// Returns the selected skills that were removed because the background
    /// grants them automatically.
    pub fn attach_background_data(&mut self, data: BackgroundData) -> Result<Vec<String>, DomainError> {
        ensure_matches("background", self.background_id.as_deref(), &data.id)?;
        self.background_data = Some(data);
        Ok(self.prune_background_skills())
    }

    fn prune_background_skills(&mut self) -> Vec<String> {
        let Some(background) = &self.background_data else {
            return Vec::new();
        };
        let (granted, kept): (Vec<String>, Vec<String>) = self
            .selected_skills
            .drain(..)
            .partition(|skill| background.grants_skill(skill));
        self.selected_skills = kept;
        granted
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> DraftId {
        self.id
    }

    pub fn name(&self) -> Option<&CharacterName> {
        self.name.as_ref()
    }

    pub fn race_id(&self) -> Option<&str> {
        self.race_id.as_deref()
    }

    pub fn subrace_id(&self) -> Option<&str> {
        self.subrace_id.as_deref()
    }

    pub fn class_id(&self) -> Option<&str> {
        self.class_id.as_deref()
    }

    pub fn background_id(&self) -> Option<&str> {
        self.background_id.as_deref()
    }

    pub fn ability_scores(&self) -> Option<&AbilityScores> {
        self.ability_scores.as_ref()
    }

    pub fn ability_score_method(&self) -> Option<AbilityScoreMethod> {
        self.ability_score_method
    }

    pub fn selected_skills(&self) -> &[String] {
        &self.selected_skills
    }

    pub fn race_data(&self) -> Option<&RaceData> {
        self.race_data.as_ref()
    }

    pub fn class_data(&self) -> Option<&ClassData> {
        self.class_data.as_ref()
    }

    pub fn background_data(&self) -> Option<&BackgroundData> {
        self.background_data.as_ref()
    }

    /// Whether `skill_id` is among the selected skills.
    pub fn has_selected_skill(&self, skill_id: &str) -> bool {
        let wanted = normalize_skill_id(skill_id);
        self.selected_skills
            .iter()
            .any(|s| normalize_skill_id(s) == wanted)
    }
}

fn ensure_matches(section: &str, selected: Option<&str>, attached: &str) -> Result<(), DomainError> {
    match selected {
        Some(id) if id == attached => Ok(()),
        Some(id) => Err(DomainError::validation(format!(
            "Cannot attach {} data '{}' to a draft with {} '{}'",
            section, attached, section, id
        ))),
        None => Err(DomainError::validation(format!(
            "Cannot attach {} data '{}' before a {} is selected",
            section, attached, section
        ))),
    }
}
