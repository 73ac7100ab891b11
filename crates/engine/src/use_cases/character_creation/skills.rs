//! Skill choice validation and skill pools.

use std::collections::BTreeSet;

use charforge_domain::{
    normalize_skill_id, skill_display_name, Skill, ValidationCode, ValidationOutcome,
};

use super::{present, AvailableSkills, CharacterCreation, SkillOption};

impl CharacterCreation {
    /// Validate selected class skills against the class list, accounting for
    /// skills the background already grants.
    ///
    /// Selections are checked in input order:
    ///
    /// 1. a repeat of an earlier selection is `DUPLICATE_SKILL`
    /// 2. a class skill counts toward the class total
    /// 3. a background grant is `BACKGROUND_SKILL_NOT_CHOICE`
    /// 4. anything else is `INVALID_SKILL_CHOICE`
    ///
    /// The class total must equal the class's choice count. A failed
    /// background lookup is reported but validation continues as if the
    /// background granted nothing.
    pub fn validate_skill_choices<S: AsRef<str>>(
        &self,
        class_id: &str,
        background_id: Option<&str>,
        selected: &[S],
    ) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        let Some(class_id) = present(class_id) else {
            outcome.push_error(
                "class_id",
                ValidationCode::Required,
                "Class is required to choose skills",
            );
            return outcome;
        };

        let class = match self.rule_data.get_class_data(class_id) {
            Ok(class) => class,
            Err(e) => {
                tracing::warn!(class_id = %class_id, error = %e, "Failed to resolve class for skill choices");
                outcome.push_error(
                    "class_id",
                    ValidationCode::InvalidClass,
                    format!("Invalid class: {}", class_id),
                );
                return outcome;
            }
        };

        let background = match background_id.and_then(present) {
            Some(background_id) => match self.rule_data.get_background_data(background_id) {
                Ok(background) => Some(background),
                Err(e) => {
                    tracing::warn!(
                        background_id = %background_id,
                        error = %e,
                        "Failed to resolve background for skill choices"
                    );
                    outcome.push_error(
                        "background_id",
                        ValidationCode::InvalidBackground,
                        format!("Invalid background: {}", background_id),
                    );
                    None
                }
            },
            None => None,
        };
        let granted_by_background =
            |skill: &str| background.as_ref().is_some_and(|b| b.grants_skill(skill));

        let mut seen = BTreeSet::new();
        let mut class_picks = Vec::new();

        for raw in selected {
            let raw = raw.as_ref();
            let skill = normalize_skill_id(raw);
            let field = format!("skills.{}", skill);

            if !seen.insert(skill.clone()) {
                outcome.push_error(
                    field,
                    ValidationCode::DuplicateSkill,
                    format!("Skill selected more than once: {}", raw),
                );
            } else if class.offers_skill(&skill) {
                class_picks.push(skill);
            } else if granted_by_background(skill.as_str()) {
                outcome.push_error(
                    field,
                    ValidationCode::BackgroundSkillNotChoice,
                    format!(
                        "{} is granted by the background and cannot be chosen",
                        skill_display_name(&skill)
                    ),
                );
            } else {
                outcome.push_error(
                    field,
                    ValidationCode::InvalidSkillChoice,
                    format!("{} is not a {} skill choice", skill_display_name(&skill), class.name),
                );
            }
        }

        let required = usize::from(class.skill_choice_count);
        if class_picks.len() != required {
            outcome.push_error(
                "skills",
                ValidationCode::IncorrectSkillCount,
                format!(
                    "{} requires {} skill choices, got {}",
                    class.name,
                    required,
                    class_picks.len()
                ),
            );
        }

        if outcome.is_valid() {
            for skill in class_picks.iter().filter(|s| granted_by_background(s.as_str())) {
                outcome.push_warning(
                    format!("skills.{}", skill),
                    ValidationCode::SkillOverlap,
                    format!(
                        "{} is already granted by the background; choose another skill",
                        skill_display_name(skill)
                    ),
                );
            }
        }

        tracing::debug!(
            class_id = %class_id,
            error_count = outcome.errors().len(),
            warning_count = outcome.warnings().len(),
            "Validated skill choices"
        );
        outcome
    }

    /// Skill pools for UI display. Unresolvable IDs give empty pools.
    pub fn get_available_skills(&self, class_id: &str, background_id: &str) -> AvailableSkills {
        let class_skills = present(class_id)
            .and_then(|id| self.rule_data.get_class_data(id).ok())
            .map(|class| class.skill_choices)
            .unwrap_or_default();
        let background_skills = present(background_id)
            .and_then(|id| self.rule_data.get_background_data(id).ok())
            .map(|background| background.skill_proficiencies)
            .unwrap_or_default();

        AvailableSkills {
            class_skills: class_skills.iter().map(|id| skill_option(id)).collect(),
            background_skills: background_skills.iter().map(|id| skill_option(id)).collect(),
        }
    }
}

fn skill_option(id: &str) -> SkillOption {
    SkillOption {
        id: id.to_string(),
        name: skill_display_name(id),
        ability: Skill::from_id(id).map(|skill| skill.ability()),
    }
}
