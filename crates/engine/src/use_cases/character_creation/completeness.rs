//! Draft completeness.

use charforge_domain::{CharacterDraft, CreationStep};

use super::CharacterCreation;

/// Sections of `draft` that still need a choice, in [`CreationStep::ALL`]
/// order. The draft is complete when this is empty.
///
/// Skills count as chosen once any skill is selected, or when the attached
/// class data offers no skill choices at all.
pub fn check_completeness(draft: &CharacterDraft) -> Vec<CreationStep> {
    CreationStep::ALL
        .into_iter()
        .filter(|step| !is_step_done(draft, *step))
        .collect()
}

fn is_step_done(draft: &CharacterDraft, step: CreationStep) -> bool {
    match step {
        CreationStep::Name => draft.name().is_some(),
        CreationStep::Race => draft.race_id().is_some(),
        CreationStep::Class => draft.class_id().is_some(),
        CreationStep::AbilityScores => draft.ability_scores().is_some(),
        CreationStep::Background => draft.background_id().is_some(),
        CreationStep::Skills => {
            !draft.selected_skills().is_empty()
                || draft
                    .class_data()
                    .is_some_and(|class| class.skill_choice_count == 0)
        }
    }
}

impl CharacterCreation {
    /// See [`check_completeness`].
    pub fn check_completeness(&self, draft: &CharacterDraft) -> Vec<CreationStep> {
        check_completeness(draft)
    }
}
