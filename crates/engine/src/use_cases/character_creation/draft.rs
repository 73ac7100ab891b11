//! Whole-draft validation.

use std::sync::Arc;

use tracing::instrument;

use charforge_domain::{
    BackgroundData, CharacterDraft, ClassData, DraftValidationReport, RaceData, ValidationCode,
    ValidationOutcome,
};

use super::{check_completeness, validate_ability_scores, CharacterCreation};
use crate::infrastructure::ports::{RuleDataError, RuleDataProvider};

impl CharacterCreation {
    /// Validate every populated section of a draft and report what is
    /// still missing.
    ///
    /// Sections are checked independently, so an invalid race does not hide
    /// problems with the skills. Results are accumulated in a fixed order
    /// (race, class, ability scores, skills, background), so the same draft
    /// and rule data always produce the same report.
    ///
    /// Rule data attached to the draft is used instead of the provider. A bad
    /// class or background ID is reported once, by its own section.
    #[instrument(skip(self, draft), fields(draft_id = %draft.id()))]
    pub fn validate_character_draft(&self, draft: &CharacterDraft) -> DraftValidationReport {
        let rules = self.with_attached_data(draft);
        let missing_steps = check_completeness(draft);

        let race = draft
            .race_id()
            .map(|race_id| rules.validate_race(race_id, draft.subrace_id()).outcome);
        let class = draft
            .class_id()
            .map(|class_id| rules.validate_class(class_id, draft.ability_scores()).outcome);
        let ability_scores = draft.ability_scores().map(|scores| {
            let method = draft
                .ability_score_method()
                .map(|m| m.as_str())
                .unwrap_or_default();
            validate_ability_scores(Some(scores), method)
        });
        let background = draft
            .background_id()
            .map(|background_id| rules.validate_background_choice(background_id).outcome);
        let skills = (!draft.selected_skills().is_empty()).then(|| {
            let mut skills = rules.validate_skill_choices(
                draft.class_id().unwrap_or_default(),
                draft.background_id(),
                draft.selected_skills(),
            );
            let class_reported = reported_on(class.as_ref(), "class_id");
            let background_reported = reported_on(background.as_ref(), "background_id");
            skills.retain_errors(|e| match e.code {
                ValidationCode::InvalidClass => !class_reported,
                ValidationCode::InvalidBackground => !background_reported,
                _ => true,
            });
            skills
        });

        let mut outcome = ValidationOutcome::new();
        for section in [race, class, ability_scores, skills, background].into_iter().flatten() {
            outcome.merge(section);
        }

        let report = DraftValidationReport::new(missing_steps, outcome);
        tracing::debug!(
            is_complete = report.is_complete,
            is_valid = report.is_valid,
            error_count = report.errors.len(),
            warning_count = report.warnings.len(),
            "Validated character draft"
        );
        report
    }

    fn with_attached_data(&self, draft: &CharacterDraft) -> CharacterCreation {
        if draft.race_data().is_none() && draft.class_data().is_none() && draft.background_data().is_none() {
            return self.clone();
        }
        CharacterCreation::new(Arc::new(AttachedRuleData {
            race: draft.race_data().cloned(),
            class: draft.class_data().cloned(),
            background: draft.background_data().cloned(),
            fallback: Arc::clone(&self.rule_data),
        }))
    }
}

fn reported_on(section: Option<&ValidationOutcome>, field: &str) -> bool {
    section.is_some_and(|outcome| outcome.has_error_on(field))
}

/// Serves a draft's hydrated records, falling back to the real provider for
/// any other ID.
struct AttachedRuleData {
    race: Option<RaceData>,
    class: Option<ClassData>,
    background: Option<BackgroundData>,
    fallback: Arc<dyn RuleDataProvider>,
}

impl RuleDataProvider for AttachedRuleData {
    fn get_race_data(&self, id: &str) -> Result<RaceData, RuleDataError> {
        match &self.race {
            Some(race) if race.id == id => Ok(race.clone()),
            _ => self.fallback.get_race_data(id),
        }
    }

    fn get_class_data(&self, id: &str) -> Result<ClassData, RuleDataError> {
        match &self.class {
            Some(class) if class.id == id => Ok(class.clone()),
            _ => self.fallback.get_class_data(id),
        }
    }

    fn get_background_data(&self, id: &str) -> Result<BackgroundData, RuleDataError> {
        match &self.background {
            Some(background) if background.id == id => Ok(background.clone()),
            _ => self.fallback.get_background_data(id),
        }
    }
}
