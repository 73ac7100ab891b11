//! Derived character statistics
//!
//! Computed from ability scores and resolved rule data; never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Ability, Skill};

/// Combat and skill numbers derived from a finished set of choices.
///
/// Maps are ordered so two calculations over the same inputs serialize
/// identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub max_hit_points: i32,
    pub armor_class: i32,
    pub initiative: i32,
    pub proficiency_bonus: i32,
    /// Saving throw bonus for every ability
    pub saving_throws: BTreeMap<Ability, i32>,
    /// Bonus for every one of the eighteen skills
    pub skills: BTreeMap<Skill, i32>,
}

impl DerivedStats {
    pub fn saving_throw(&self, ability: Ability) -> i32 {
        self.saving_throws.get(&ability).copied().unwrap_or(0)
    }

    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_serialize_with_string_keys() {
        let mut saving_throws = BTreeMap::new();
        saving_throws.insert(Ability::Strength, 5);
        let mut skills = BTreeMap::new();
        skills.insert(Skill::SleightOfHand, 2);
        let stats = DerivedStats {
            max_hit_points: 12,
            armor_class: 12,
            initiative: 2,
            proficiency_bonus: 2,
            saving_throws,
            skills,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["maxHitPoints"], 12);
        assert_eq!(json["savingThrows"]["strength"], 5);
        assert_eq!(json["skills"]["sleight_of_hand"], 2);
    }

    #[test]
    fn lookups_default_to_zero() {
        let stats = DerivedStats {
            max_hit_points: 1,
            armor_class: 10,
            initiative: 0,
            proficiency_bonus: 2,
            saving_throws: BTreeMap::new(),
            skills: BTreeMap::new(),
        };
        assert_eq!(stats.saving_throw(Ability::Wisdom), 0);
        assert_eq!(stats.skill(Skill::Stealth), 0);
    }
}
