//! Rule data entities - Immutable ruleset records for character creation
//!
//! Records are supplied by a rule data source and identified by string IDs
//! (e.g., "human", "fighter", "soldier"). Skill references are kept as raw
//! identifiers so unknown or homebrew values can be reported rather than
//! rejected at load time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{normalize_skill_id, Ability, HitDie};

// =============================================================================
// Races
// =============================================================================

/// A playable race and the subraces available under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub ability_bonuses: BTreeMap<Ability, i32>,
    #[serde(default)]
    pub subraces: Vec<SubraceData>,
}

impl RaceData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            traits: Vec::new(),
            ability_bonuses: BTreeMap::new(),
            subraces: Vec::new(),
        }
    }

    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    pub fn with_bonus(mut self, ability: Ability, bonus: i32) -> Self {
        *self.ability_bonuses.entry(ability).or_insert(0) += bonus;
        self
    }

    pub fn with_subrace(mut self, subrace: SubraceData) -> Self {
        self.subraces.push(subrace);
        self
    }

    /// Find a subrace of this race by ID.
    pub fn subrace(&self, subrace_id: &str) -> Option<&SubraceData> {
        self.subraces.iter().find(|s| s.id == subrace_id)
    }
}

/// A subrace; its traits and bonuses stack on top of the parent race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubraceData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub ability_bonuses: BTreeMap<Ability, i32>,
}

impl SubraceData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            traits: Vec::new(),
            ability_bonuses: BTreeMap::new(),
        }
    }

    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    pub fn with_bonus(mut self, ability: Ability, bonus: i32) -> Self {
        *self.ability_bonuses.entry(ability).or_insert(0) += bonus;
        self
    }
}

// =============================================================================
// Classes
// =============================================================================

/// A character class as needed at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassData {
    pub id: String,
    pub name: String,
    /// Hit die formula, e.g. "1d10"
    pub hit_die: String,
    #[serde(default)]
    pub primary_abilities: Vec<Ability>,
    #[serde(default)]
    pub saving_throws: Vec<Ability>,
    /// Number of skills the player picks at creation
    #[serde(default)]
    pub skill_choice_count: u8,
    /// Skill identifiers the player may pick from
    #[serde(default)]
    pub skill_choices: Vec<String>,
}

impl ClassData {
    pub fn new(id: impl Into<String>, name: impl Into<String>, hit_die: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hit_die: hit_die.into(),
            primary_abilities: Vec::new(),
            saving_throws: Vec::new(),
            skill_choice_count: 0,
            skill_choices: Vec::new(),
        }
    }

    pub fn with_primary_abilities(mut self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        self.primary_abilities = abilities.into_iter().collect();
        self
    }

    pub fn with_saving_throws(mut self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        self.saving_throws = abilities.into_iter().collect();
        self
    }

    pub fn with_skill_choices<S: Into<String>>(
        mut self,
        count: u8,
        skills: impl IntoIterator<Item = S>,
    ) -> Self {
        self.skill_choice_count = count;
        self.skill_choices = skills.into_iter().map(Into::into).collect();
        self
    }

    /// The parsed hit die (d6 if the formula is unusable).
    pub fn parsed_hit_die(&self) -> HitDie {
        HitDie::parse_or_default(&self.hit_die)
    }

    pub fn has_saving_throw(&self, ability: Ability) -> bool {
        self.saving_throws.contains(&ability)
    }

    /// Whether `skill_id` is one of this class's choosable skills.
    pub fn offers_skill(&self, skill_id: &str) -> bool {
        let wanted = normalize_skill_id(skill_id);
        self.skill_choices
            .iter()
            .any(|s| normalize_skill_id(s) == wanted)
    }
}

// =============================================================================
// Backgrounds
// =============================================================================

/// A background and the proficiencies/equipment it grants automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundData {
    pub id: String,
    pub name: String,
    /// Skill identifiers granted without a choice
    #[serde(default)]
    pub skill_proficiencies: Vec<String>,
    /// Number of extra languages the player may pick
    #[serde(default)]
    pub language_count: u8,
    #[serde(default)]
    pub starting_equipment: Vec<String>,
}

impl BackgroundData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skill_proficiencies: Vec::new(),
            language_count: 0,
            starting_equipment: Vec::new(),
        }
    }

    pub fn with_skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skill_proficiencies = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_language_count(mut self, count: u8) -> Self {
        self.language_count = count;
        self
    }

    pub fn with_equipment<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.starting_equipment = items.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this background grants `skill_id` automatically.
    pub fn grants_skill(&self, skill_id: &str) -> bool {
        let wanted = normalize_skill_id(skill_id);
        self.skill_proficiencies
            .iter()
            .any(|s| normalize_skill_id(s) == wanted)
    }
}
