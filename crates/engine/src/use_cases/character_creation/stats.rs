//! Derived statistics.

use std::collections::BTreeMap;

use tracing::instrument;

use charforge_domain::game_systems::dnd5e::{
    ability_modifier, max_hit_points, proficiency_bonus, unarmored_armor_class,
};
use charforge_domain::{
    normalize_skill_id, Ability, AbilityScores, BackgroundData, Character, CharacterDraft,
    ClassData, DerivedStats, RaceData, Skill,
};

use super::{CharacterCreation, CharacterCreationError};

/// Everything stat calculation reads from a draft or a character.
#[derive(Debug, Clone, Copy)]
pub struct StatInputs<'a> {
    pub level: u8,
    pub race_id: Option<&'a str>,
    pub class_id: Option<&'a str>,
    pub ability_scores: Option<&'a AbilityScores>,
    pub race: Option<&'a RaceData>,
    pub class: Option<&'a ClassData>,
    pub background: Option<&'a BackgroundData>,
    /// Skills chosen at creation; background grants are read from `background`.
    pub chosen_skills: &'a [String],
}

/// Something derived stats can be calculated for.
pub trait StatSubject {
    fn stat_inputs(&self) -> StatInputs<'_>;
}

/// A draft is calculated as a level 1 character from its hydrated data.
impl StatSubject for CharacterDraft {
    fn stat_inputs(&self) -> StatInputs<'_> {
        StatInputs {
            level: 1,
            race_id: self.race_id(),
            class_id: self.class_id(),
            ability_scores: self.ability_scores(),
            race: self.race_data(),
            class: self.class_data(),
            background: self.background_data(),
            chosen_skills: self.selected_skills(),
        }
    }
}

impl StatSubject for Character {
    fn stat_inputs(&self) -> StatInputs<'_> {
        StatInputs {
            level: self.level(),
            race_id: Some(self.race_id()),
            class_id: Some(self.class_id()),
            ability_scores: Some(self.ability_scores()),
            race: Some(self.race()),
            class: Some(self.class()),
            background: Some(self.background()),
            chosen_skills: self.skill_proficiencies(),
        }
    }
}

impl CharacterCreation {
    /// Compute derived statistics.
    ///
    /// Scores are used as stored; racial bonuses are expected to be applied
    /// already.
    ///
    /// # Errors
    ///
    /// `MissingInput` naming the first absent input among class ID, race ID,
    /// ability scores, class data and race data. Nothing is computed in that
    /// case.
    #[instrument(skip_all, fields(level = tracing::field::Empty))]
    pub fn calculate_character_stats<S: StatSubject + ?Sized>(
        &self,
        subject: &S,
    ) -> Result<DerivedStats, CharacterCreationError> {
        let inputs = subject.stat_inputs();
        tracing::Span::current().record("level", inputs.level);

        inputs
            .class_id
            .ok_or(CharacterCreationError::MissingInput("class_id"))?;
        inputs
            .race_id
            .ok_or(CharacterCreationError::MissingInput("race_id"))?;
        let scores = inputs
            .ability_scores
            .ok_or(CharacterCreationError::MissingInput("ability_scores"))?;
        let class = inputs
            .class
            .ok_or(CharacterCreationError::MissingInput("class_data"))?;
        inputs
            .race
            .ok_or(CharacterCreationError::MissingInput("race_data"))?;

        let modifier = |ability: Ability| ability_modifier(i32::from(scores.get(ability)));
        let proficiency = proficiency_bonus(i32::from(inputs.level));
        let dexterity = modifier(Ability::Dexterity);

        let saving_throws: BTreeMap<Ability, i32> = Ability::ALL
            .into_iter()
            .map(|ability| {
                let bonus = if class.has_saving_throw(ability) {
                    proficiency
                } else {
                    0
                };
                (ability, modifier(ability) + bonus)
            })
            .collect();

        let chosen: Vec<String> = inputs
            .chosen_skills
            .iter()
            .map(|s| normalize_skill_id(s))
            .collect();
        let is_proficient = |skill: Skill| {
            chosen.iter().any(|s| s == skill.id())
                || inputs.background.is_some_and(|b| b.grants_skill(skill.id()))
        };

        let skills: BTreeMap<Skill, i32> = Skill::all()
            .map(|skill| {
                let bonus = if is_proficient(skill) { proficiency } else { 0 };
                (skill, modifier(skill.ability()) + bonus)
            })
            .collect();

        let stats = DerivedStats {
            max_hit_points: max_hit_points(
                class.parsed_hit_die(),
                inputs.level,
                modifier(Ability::Constitution),
            ),
            armor_class: unarmored_armor_class(dexterity),
            initiative: dexterity,
            proficiency_bonus: proficiency,
            saving_throws,
            skills,
        };

        tracing::debug!(
            max_hit_points = stats.max_hit_points,
            armor_class = stats.armor_class,
            "Calculated character stats"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use charforge_domain::{AbilityScoreMethod, CharacterName};

    use super::*;
    use crate::infrastructure::rule_data::InMemoryRuleData;

    fn creation() -> CharacterCreation {
        CharacterCreation::new(Arc::new(InMemoryRuleData::new()))
    }

    fn hydrated(class: ClassData, scores: [u8; 6]) -> CharacterDraft {
        let mut draft = CharacterDraft::new()
            .with_name(CharacterName::new("Test").unwrap())
            .with_race("human", None)
            .with_class(class.id.clone())
            .with_ability_scores(AbilityScores::from_array(scores), AbilityScoreMethod::Manual);
        draft.attach_race_data(RaceData::new("human", "Human")).unwrap();
        draft.attach_class_data(class).unwrap();
        draft
    }

    #[test]
    fn missing_inputs_are_named() {
        let creation = creation();

        let draft = CharacterDraft::new();
        assert!(matches!(
            creation.calculate_character_stats(&draft),
            Err(CharacterCreationError::MissingInput("class_id"))
        ));

        let draft = CharacterDraft::new().with_class("fighter");
        assert!(matches!(
            creation.calculate_character_stats(&draft),
            Err(CharacterCreationError::MissingInput("race_id"))
        ));

        let draft = CharacterDraft::new().with_class("fighter").with_race("human", None);
        assert!(matches!(
            creation.calculate_character_stats(&draft),
            Err(CharacterCreationError::MissingInput("ability_scores"))
        ));

        let draft = draft.with_ability_scores(
            AbilityScores::from_array([10; 6]),
            AbilityScoreMethod::Manual,
        );
        assert!(matches!(
            creation.calculate_character_stats(&draft),
            Err(CharacterCreationError::MissingInput("class_data"))
        ));

        let mut draft = draft;
        draft
            .attach_class_data(ClassData::new("fighter", "Fighter", "1d10"))
            .unwrap();
        assert!(matches!(
            creation.calculate_character_stats(&draft),
            Err(CharacterCreationError::MissingInput("race_data"))
        ));
    }

    #[test]
    fn negative_modifiers_floor() {
        let draft = hydrated(
            ClassData::new("wizard", "Wizard", "1d6"),
            [10, 9, 3, 10, 10, 10],
        );
        let stats = creation().calculate_character_stats(&draft).unwrap();
        // DEX 9 is -1, CON 3 is -4
        assert_eq!(stats.initiative, -1);
        assert_eq!(stats.armor_class, 9);
        assert_eq!(stats.max_hit_points, 2);
        assert_eq!(stats.saving_throw(Ability::Constitution), -4);
    }

    #[test]
    fn unusable_hit_die_falls_back_to_d6() {
        let draft = hydrated(ClassData::new("oddball", "Oddball", "2d20"), [10; 6]);
        let stats = creation().calculate_character_stats(&draft).unwrap();
        assert_eq!(stats.max_hit_points, 6);
    }

    #[test]
    fn every_ability_and_skill_is_reported() {
        let draft = hydrated(ClassData::new("fighter", "Fighter", "1d10"), [10; 6]);
        let stats = creation().calculate_character_stats(&draft).unwrap();
        assert_eq!(stats.saving_throws.len(), 6);
        assert_eq!(stats.skills.len(), 18);
        assert!(stats.skills.values().all(|bonus| *bonus == 0));
    }

    #[test]
    fn background_grants_add_proficiency() {
        let mut draft = hydrated(ClassData::new("fighter", "Fighter", "1d10"), [10; 6])
            .with_background("criminal");
        draft
            .attach_background_data(BackgroundData::new("criminal", "Criminal").with_skills(["stealth"]))
            .unwrap();

        let stats = creation().calculate_character_stats(&draft).unwrap();
        assert_eq!(stats.skill(Skill::Stealth), 2);
        assert_eq!(stats.skill(Skill::Deception), 0);
    }

    #[test]
    fn higher_levels_scale_hit_points_and_proficiency() {
        let mut draft = hydrated(
            ClassData::new("fighter", "Fighter", "1d10")
                .with_saving_throws([Ability::Strength, Ability::Constitution]),
            [16, 14, 15, 10, 12, 8],
        )
        .with_background("soldier")
        .with_skills(["perception", "survival"]);
        draft
            .attach_background_data(BackgroundData::new("soldier", "Soldier"))
            .unwrap();

        let character = Character::from_draft(draft, 5).unwrap();
        let stats = creation().calculate_character_stats(&character).unwrap();

        // 12 at first level, then 4 levels of (6 + 2)
        assert_eq!(stats.max_hit_points, 44);
        assert_eq!(stats.proficiency_bonus, 3);
        assert_eq!(stats.saving_throw(Ability::Strength), 6);
        assert_eq!(stats.skill(Skill::Perception), 4);
    }
}
