//! In-memory rule data provider.

use std::collections::BTreeMap;

use charforge_domain::{Ability, BackgroundData, ClassData, RaceData, SubraceData};

use crate::infrastructure::ports::{RuleDataError, RuleDataProvider, RuleKind};

/// Rule data held in memory, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleData {
    races: BTreeMap<String, RaceData>,
    classes: BTreeMap<String, ClassData>,
    backgrounds: BTreeMap<String, BackgroundData>,
}

impl InMemoryRuleData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_race(mut self, race: RaceData) -> Self {
        self.races.insert(race.id.clone(), race);
        self
    }

    pub fn with_class(mut self, class: ClassData) -> Self {
        self.classes.insert(class.id.clone(), class);
        self
    }

    pub fn with_background(mut self, background: BackgroundData) -> Self {
        self.backgrounds.insert(background.id.clone(), background);
        self
    }

    pub fn race_ids(&self) -> impl Iterator<Item = &str> {
        self.races.keys().map(String::as_str)
    }

    pub fn class_ids(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn background_ids(&self) -> impl Iterator<Item = &str> {
        self.backgrounds.keys().map(String::as_str)
    }

    /// A small SRD-flavoured ruleset: the core races, five classes and five
    /// backgrounds.
    pub fn srd() -> Self {
        use Ability::*;

        Self::new()
            // Races
            .with_race(
                RaceData::new("human", "Human")
                    .with_trait("Extra Language")
                    .with_bonus(Strength, 1)
                    .with_bonus(Dexterity, 1)
                    .with_bonus(Constitution, 1)
                    .with_bonus(Intelligence, 1)
                    .with_bonus(Wisdom, 1)
                    .with_bonus(Charisma, 1),
            )
            .with_race(
                RaceData::new("elf", "Elf")
                    .with_trait("Darkvision")
                    .with_trait("Fey Ancestry")
                    .with_trait("Trance")
                    .with_bonus(Dexterity, 2)
                    .with_subrace(
                        SubraceData::new("high_elf", "High Elf")
                            .with_trait("Cantrip")
                            .with_bonus(Intelligence, 1),
                    )
                    .with_subrace(
                        SubraceData::new("wood_elf", "Wood Elf")
                            .with_trait("Fleet of Foot")
                            .with_trait("Mask of the Wild")
                            .with_bonus(Wisdom, 1),
                    ),
            )
            .with_race(
                RaceData::new("dwarf", "Dwarf")
                    .with_trait("Darkvision")
                    .with_trait("Dwarven Resilience")
                    .with_bonus(Constitution, 2)
                    .with_subrace(
                        SubraceData::new("hill_dwarf", "Hill Dwarf")
                            .with_trait("Dwarven Toughness")
                            .with_bonus(Wisdom, 1),
                    )
                    .with_subrace(
                        SubraceData::new("mountain_dwarf", "Mountain Dwarf")
                            .with_trait("Dwarven Armor Training")
                            .with_bonus(Strength, 2),
                    ),
            )
            .with_race(
                RaceData::new("halfling", "Halfling")
                    .with_trait("Lucky")
                    .with_trait("Brave")
                    .with_bonus(Dexterity, 2)
                    .with_subrace(
                        SubraceData::new("lightfoot", "Lightfoot")
                            .with_trait("Naturally Stealthy")
                            .with_bonus(Charisma, 1),
                    )
                    .with_subrace(
                        SubraceData::new("stout", "Stout")
                            .with_trait("Stout Resilience")
                            .with_bonus(Constitution, 1),
                    ),
            )
            // Classes
            .with_class(
                ClassData::new("fighter", "Fighter", "1d10")
                    .with_primary_abilities([Strength, Dexterity])
                    .with_saving_throws([Strength, Constitution])
                    .with_skill_choices(
                        2,
                        [
                            "acrobatics",
                            "animal_handling",
                            "athletics",
                            "history",
                            "insight",
                            "intimidation",
                            "perception",
                            "survival",
                        ],
                    ),
            )
            .with_class(
                ClassData::new("wizard", "Wizard", "1d6")
                    .with_primary_abilities([Intelligence])
                    .with_saving_throws([Intelligence, Wisdom])
                    .with_skill_choices(
                        2,
                        ["arcana", "history", "insight", "investigation", "medicine", "religion"],
                    ),
            )
            .with_class(
                ClassData::new("rogue", "Rogue", "1d8")
                    .with_primary_abilities([Dexterity])
                    .with_saving_throws([Dexterity, Intelligence])
                    .with_skill_choices(
                        4,
                        [
                            "acrobatics",
                            "athletics",
                            "deception",
                            "insight",
                            "intimidation",
                            "investigation",
                            "perception",
                            "performance",
                            "persuasion",
                            "sleight_of_hand",
                            "stealth",
                        ],
                    ),
            )
            .with_class(
                ClassData::new("cleric", "Cleric", "1d8")
                    .with_primary_abilities([Wisdom])
                    .with_saving_throws([Wisdom, Charisma])
                    .with_skill_choices(
                        2,
                        ["history", "insight", "medicine", "persuasion", "religion"],
                    ),
            )
            .with_class(
                ClassData::new("barbarian", "Barbarian", "1d12")
                    .with_primary_abilities([Strength])
                    .with_saving_throws([Strength, Constitution])
                    .with_skill_choices(
                        2,
                        [
                            "animal_handling",
                            "athletics",
                            "intimidation",
                            "nature",
                            "perception",
                            "survival",
                        ],
                    ),
            )
            // Backgrounds
            .with_background(
                BackgroundData::new("soldier", "Soldier")
                    .with_skills(["athletics", "intimidation"])
                    .with_equipment(["insignia of rank", "deck of cards", "common clothes"]),
            )
            .with_background(
                BackgroundData::new("acolyte", "Acolyte")
                    .with_skills(["insight", "religion"])
                    .with_language_count(2)
                    .with_equipment(["holy symbol", "prayer book", "vestments"]),
            )
            .with_background(
                BackgroundData::new("sage", "Sage")
                    .with_skills(["arcana", "history"])
                    .with_language_count(2)
                    .with_equipment(["bottle of ink", "quill", "small knife"]),
            )
            .with_background(
                BackgroundData::new("criminal", "Criminal")
                    .with_skills(["deception", "stealth"])
                    .with_equipment(["crowbar", "dark common clothes with hood"]),
            )
            .with_background(
                BackgroundData::new("folk_hero", "Folk Hero")
                    .with_skills(["animal_handling", "survival"])
                    .with_equipment(["set of artisan's tools", "shovel", "iron pot"]),
            )
    }
}

impl RuleDataProvider for InMemoryRuleData {
    fn get_race_data(&self, id: &str) -> Result<RaceData, RuleDataError> {
        self.races
            .get(id.trim())
            .cloned()
            .ok_or_else(|| RuleDataError::not_found(RuleKind::Race, id))
    }

    fn get_class_data(&self, id: &str) -> Result<ClassData, RuleDataError> {
        self.classes
            .get(id.trim())
            .cloned()
            .ok_or_else(|| RuleDataError::not_found(RuleKind::Class, id))
    }

    fn get_background_data(&self, id: &str) -> Result<BackgroundData, RuleDataError> {
        self.backgrounds
            .get(id.trim())
            .cloned()
            .ok_or_else(|| RuleDataError::not_found(RuleKind::Background, id))
    }
}

#[cfg(test)]
mod tests {
    use charforge_domain::Skill;

    use super::*;

    #[test]
    fn lookup_by_id() {
        let data = InMemoryRuleData::srd();
        let elf = data.get_race_data("elf").unwrap();
        assert_eq!(elf.subraces.len(), 2);
        assert!(elf.subrace("high_elf").is_some());

        let err = data.get_race_data("lizardfolk").unwrap_err();
        assert_eq!(err, RuleDataError::not_found(RuleKind::Race, "lizardfolk"));
    }

    #[test]
    fn srd_race_ids_resolve_with_their_subraces() {
        let data = InMemoryRuleData::srd();
        let ids: Vec<&str> = data.race_ids().collect();
        assert_eq!(ids, vec!["dwarf", "elf", "halfling", "human"]);
        let subrace_count: usize = ids
            .iter()
            .map(|id| data.get_race_data(id).unwrap().subraces.len())
            .sum();
        assert_eq!(subrace_count, 6);
    }

    #[test]
    fn srd_skill_ids_are_known_skills() {
        let data = InMemoryRuleData::srd();
        for id in data.class_ids() {
            let class = data.get_class_data(id).unwrap();
            for skill in &class.skill_choices {
                assert!(Skill::from_id(skill).is_some(), "{}: {}", id, skill);
            }
            assert!(class.skill_choice_count as usize <= class.skill_choices.len());
        }
        for id in data.background_ids() {
            let background = data.get_background_data(id).unwrap();
            for skill in &background.skill_proficiencies {
                assert!(Skill::from_id(skill).is_some(), "{}: {}", id, skill);
            }
        }
    }

    #[test]
    fn srd_hit_dice_parse() {
        let data = InMemoryRuleData::srd();
        let sizes: Vec<i32> = ["wizard", "rogue", "fighter", "barbarian"]
            .iter()
            .map(|id| data.get_class_data(id).unwrap().parsed_hit_die().max())
            .collect();
        assert_eq!(sizes, vec![6, 8, 10, 12]);
    }

    #[test]
    fn builder_replaces_by_id() {
        let data = InMemoryRuleData::new()
            .with_class(ClassData::new("fighter", "Fighter", "1d8"))
            .with_class(ClassData::new("fighter", "Fighter", "1d10"));
        assert_eq!(data.class_ids().count(), 1);
        assert_eq!(data.get_class_data("fighter").unwrap().hit_die, "1d10");
    }
}
