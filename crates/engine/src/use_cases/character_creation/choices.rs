//! Race and class choice validation.

use std::collections::BTreeMap;

use charforge_domain::{AbilityScores, ValidationCode, ValidationOutcome};

use super::{present, CharacterCreation, ClassValidation, RaceValidation};

impl CharacterCreation {
    /// Validate a race and optional subrace.
    ///
    /// Any provider failure is reported as `INVALID_RACE`; a missing race and
    /// an unreachable source look the same to the caller.
    pub fn validate_race(&self, race_id: &str, subrace_id: Option<&str>) -> RaceValidation {
        let mut result = RaceValidation {
            outcome: ValidationOutcome::new(),
            traits: Vec::new(),
            ability_bonuses: BTreeMap::new(),
        };

        let Some(race_id) = present(race_id) else {
            result
                .outcome
                .push_error("race_id", ValidationCode::Required, "Race is required");
            return result;
        };

        let race = match self.rule_data.get_race_data(race_id) {
            Ok(race) => race,
            Err(e) => {
                tracing::warn!(race_id = %race_id, error = %e, "Failed to resolve race");
                result.outcome.push_error(
                    "race_id",
                    ValidationCode::InvalidRace,
                    format!("Invalid race: {}", race_id),
                );
                return result;
            }
        };

        result.traits = race.traits.clone();
        result.ability_bonuses = race.ability_bonuses.clone();

        if let Some(subrace_id) = subrace_id.and_then(present) {
            match race.subrace(subrace_id) {
                Some(subrace) => {
                    result.traits.extend(subrace.traits.iter().cloned());
                    for (ability, bonus) in &subrace.ability_bonuses {
                        *result.ability_bonuses.entry(*ability).or_insert(0) += bonus;
                    }
                }
                None => result.outcome.push_error(
                    "subrace_id",
                    ValidationCode::InvalidSubrace,
                    format!("Invalid subrace '{}' for race '{}'", subrace_id, race_id),
                ),
            }
        }

        result
    }

    /// Validate a class choice and expose what later steps need from it.
    ///
    /// Multiclass prerequisites are not checked, so `ability_scores` does not
    /// affect the outcome.
    pub fn validate_class(
        &self,
        class_id: &str,
        _ability_scores: Option<&AbilityScores>,
    ) -> ClassValidation {
        let mut result = ClassValidation {
            outcome: ValidationOutcome::new(),
            hit_die: None,
            primary_abilities: Vec::new(),
            saving_throws: Vec::new(),
            skill_choice_count: 0,
            available_skills: Vec::new(),
        };

        let Some(class_id) = present(class_id) else {
            result
                .outcome
                .push_error("class_id", ValidationCode::Required, "Class is required");
            return result;
        };

        match self.rule_data.get_class_data(class_id) {
            Ok(class) => {
                result.hit_die = Some(class.parsed_hit_die());
                result.primary_abilities = class.primary_abilities;
                result.saving_throws = class.saving_throws;
                result.skill_choice_count = class.skill_choice_count;
                result.available_skills = class.skill_choices;
            }
            Err(e) => {
                tracing::warn!(class_id = %class_id, error = %e, "Failed to resolve class");
                result.outcome.push_error(
                    "class_id",
                    ValidationCode::InvalidClass,
                    format!("Invalid class: {}", class_id),
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use charforge_domain::{Ability, ClassData, RaceData, SubraceData};

    use super::*;
    use crate::infrastructure::ports::{MockRuleDataProvider, RuleDataError};
    use crate::infrastructure::rule_data::InMemoryRuleData;

    fn creation() -> CharacterCreation {
        CharacterCreation::new(Arc::new(InMemoryRuleData::srd()))
    }

    #[test]
    fn race_is_required() {
        let result = creation().validate_race("  ", None);
        assert!(result.outcome.has_error(ValidationCode::Required));
        assert!(result.traits.is_empty());
    }

    #[test]
    fn unknown_race_is_invalid() {
        let result = creation().validate_race("lizardfolk", None);
        assert!(!result.is_valid());
        assert!(result.outcome.has_error(ValidationCode::InvalidRace));
    }

    #[test]
    fn unavailable_source_looks_like_invalid_race() {
        let mut mock = MockRuleDataProvider::new();
        mock.expect_get_race_data()
            .returning(|_| Err(RuleDataError::unavailable("connection refused")));
        let creation = CharacterCreation::new(Arc::new(mock));

        let result = creation.validate_race("human", None);
        assert_eq!(result.outcome.errors()[0].code, ValidationCode::InvalidRace);
    }

    #[test]
    fn subrace_merges_traits_and_bonuses() {
        let data = InMemoryRuleData::new().with_race(
            RaceData::new("dwarf", "Dwarf")
                .with_trait("Darkvision")
                .with_bonus(Ability::Constitution, 2)
                .with_subrace(
                    SubraceData::new("mountain_dwarf", "Mountain Dwarf")
                        .with_trait("Dwarven Armor Training")
                        .with_bonus(Ability::Strength, 2)
                        .with_bonus(Ability::Constitution, 1),
                ),
        );
        let creation = CharacterCreation::new(Arc::new(data));

        let result = creation.validate_race("dwarf", Some("mountain_dwarf"));
        assert!(result.is_valid());
        assert_eq!(result.traits, vec!["Darkvision", "Dwarven Armor Training"]);
        assert_eq!(result.ability_bonuses.get(&Ability::Constitution), Some(&3));
        assert_eq!(result.ability_bonuses.get(&Ability::Strength), Some(&2));
    }

    #[test]
    fn race_without_subrace_keeps_race_values() {
        let result = creation().validate_race("elf", None);
        assert!(result.is_valid());
        assert_eq!(result.ability_bonuses.get(&Ability::Dexterity), Some(&2));
        assert_eq!(result.ability_bonuses.get(&Ability::Intelligence), None);
    }

    #[test]
    fn foreign_subrace_is_invalid() {
        let result = creation().validate_race("elf", Some("hill_dwarf"));
        assert_eq!(result.outcome.errors().len(), 1);
        assert_eq!(result.outcome.errors()[0].code, ValidationCode::InvalidSubrace);
        assert_eq!(result.outcome.errors()[0].field, "subrace_id");
        // Race data is still reported
        assert!(result.traits.contains(&"Darkvision".to_string()));
    }

    #[test]
    fn class_is_required() {
        let result = creation().validate_class("", None);
        assert!(result.outcome.has_error(ValidationCode::Required));
        assert!(result.hit_die.is_none());
    }

    #[test]
    fn unknown_class_is_invalid() {
        let result = creation().validate_class("artificer", None);
        assert!(result.outcome.has_error(ValidationCode::InvalidClass));
    }

    #[test]
    fn class_details_are_returned() {
        let result = creation().validate_class("fighter", None);
        assert!(result.is_valid());
        assert_eq!(result.hit_die.map(|d| d.max()), Some(10));
        assert_eq!(
            result.saving_throws,
            vec![Ability::Strength, Ability::Constitution]
        );
        assert_eq!(result.skill_choice_count, 2);
        assert!(result.available_skills.contains(&"athletics".to_string()));
    }

    #[test]
    fn low_scores_do_not_block_a_class() {
        let mut mock = MockRuleDataProvider::new();
        mock.expect_get_class_data()
            .times(1)
            .returning(|_| Ok(ClassData::new("wizard", "Wizard", "1d6")));
        let creation = CharacterCreation::new(Arc::new(mock));

        let scores = AbilityScores::from_array([8, 8, 8, 3, 8, 8]);
        assert!(creation.validate_class("wizard", Some(&scores)).is_valid());
    }
}
