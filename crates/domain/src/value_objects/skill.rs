//! Skill value objects
//!
//! The eighteen fixed skills and their governing abilities. Rule data refers
//! to skills by string identifier, so lookups go through
//! [`normalize_skill_id`] before touching the table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Ability;

/// One of the eighteen fixed skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

struct SkillEntry {
    skill: Skill,
    id: &'static str,
    name: &'static str,
    ability: Ability,
}

/// Skill table, in `Skill` declaration order.
static SKILL_TABLE: [SkillEntry; 18] = [
    SkillEntry { skill: Skill::Acrobatics, id: "acrobatics", name: "Acrobatics", ability: Ability::Dexterity },
    SkillEntry { skill: Skill::AnimalHandling, id: "animal_handling", name: "Animal Handling", ability: Ability::Wisdom },
    SkillEntry { skill: Skill::Arcana, id: "arcana", name: "Arcana", ability: Ability::Intelligence },
    SkillEntry { skill: Skill::Athletics, id: "athletics", name: "Athletics", ability: Ability::Strength },
    SkillEntry { skill: Skill::Deception, id: "deception", name: "Deception", ability: Ability::Charisma },
    SkillEntry { skill: Skill::History, id: "history", name: "History", ability: Ability::Intelligence },
    SkillEntry { skill: Skill::Insight, id: "insight", name: "Insight", ability: Ability::Wisdom },
    SkillEntry { skill: Skill::Intimidation, id: "intimidation", name: "Intimidation", ability: Ability::Charisma },
    SkillEntry { skill: Skill::Investigation, id: "investigation", name: "Investigation", ability: Ability::Intelligence },
    SkillEntry { skill: Skill::Medicine, id: "medicine", name: "Medicine", ability: Ability::Wisdom },
    SkillEntry { skill: Skill::Nature, id: "nature", name: "Nature", ability: Ability::Intelligence },
    SkillEntry { skill: Skill::Perception, id: "perception", name: "Perception", ability: Ability::Wisdom },
    SkillEntry { skill: Skill::Performance, id: "performance", name: "Performance", ability: Ability::Charisma },
    SkillEntry { skill: Skill::Persuasion, id: "persuasion", name: "Persuasion", ability: Ability::Charisma },
    SkillEntry { skill: Skill::Religion, id: "religion", name: "Religion", ability: Ability::Intelligence },
    SkillEntry { skill: Skill::SleightOfHand, id: "sleight_of_hand", name: "Sleight of Hand", ability: Ability::Dexterity },
    SkillEntry { skill: Skill::Stealth, id: "stealth", name: "Stealth", ability: Ability::Dexterity },
    SkillEntry { skill: Skill::Survival, id: "survival", name: "Survival", ability: Ability::Wisdom },
];

impl Skill {
    /// All eighteen skills in alphabetical order.
    pub fn all() -> impl Iterator<Item = Skill> {
        SKILL_TABLE.iter().map(|entry| entry.skill)
    }

    fn entry(&self) -> &'static SkillEntry {
        &SKILL_TABLE[*self as usize]
    }

    /// Canonical snake_case identifier (e.g., "sleight_of_hand").
    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn display_name(&self) -> &'static str {
        self.entry().name
    }

    /// The ability whose modifier this skill uses.
    pub fn ability(&self) -> Ability {
        self.entry().ability
    }

    /// Look up a skill by identifier, tolerating case, spaces and hyphens.
    pub fn from_id(id: &str) -> Option<Skill> {
        let normalized = normalize_skill_id(id);
        SKILL_TABLE
            .iter()
            .find(|entry| entry.id == normalized)
            .map(|entry| entry.skill)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Normalize a skill identifier for comparison: trimmed, lower-case, with
/// spaces and hyphens folded to underscores.
pub fn normalize_skill_id(id: &str) -> String {
    id.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Human-readable name for a skill identifier.
///
/// Known skills use their table name; anything else is title-cased word by
/// word so homebrew identifiers still render sensibly.
pub fn skill_display_name(id: &str) -> String {
    if let Some(skill) = Skill::from_id(id) {
        return skill.display_name().to_string();
    }
    normalize_skill_id(id)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        for (index, skill) in Skill::all().enumerate() {
            assert_eq!(skill as usize, index);
        }
        assert_eq!(Skill::all().count(), 18);
    }

    #[test]
    fn skill_ability_mapping() {
        assert_eq!(Skill::Athletics.ability(), Ability::Strength);
        assert_eq!(Skill::Stealth.ability(), Ability::Dexterity);
        assert_eq!(Skill::Arcana.ability(), Ability::Intelligence);
        assert_eq!(Skill::Perception.ability(), Ability::Wisdom);
        assert_eq!(Skill::Persuasion.ability(), Ability::Charisma);
    }

    #[test]
    fn from_id_tolerates_formatting() {
        assert_eq!(Skill::from_id("animal_handling"), Some(Skill::AnimalHandling));
        assert_eq!(Skill::from_id("Sleight of Hand"), Some(Skill::SleightOfHand));
        assert_eq!(Skill::from_id("ANIMAL-HANDLING"), Some(Skill::AnimalHandling));
        assert_eq!(Skill::from_id("basket_weaving"), None);
    }

    #[test]
    fn serde_uses_table_ids() {
        for skill in Skill::all() {
            let json = serde_json::to_string(&skill).unwrap();
            assert_eq!(json, format!("\"{}\"", skill.id()));
        }
    }

    #[test]
    fn display_name_for_unknown_ids_is_title_cased() {
        assert_eq!(skill_display_name("sleight_of_hand"), "Sleight of Hand");
        assert_eq!(skill_display_name("basket_weaving"), "Basket Weaving");
        assert_eq!(skill_display_name("  lore-dragons "), "Lore Dragons");
    }
}
