//! Background choice validation.

use charforge_domain::{ValidationCode, ValidationOutcome};

use super::{present, BackgroundValidation, CharacterCreation};

impl CharacterCreation {
    /// Validate a background and return what it grants.
    ///
    /// Unlike race and class, a missing background (`NOT_FOUND`) is kept
    /// apart from other provider failures (`INVALID_BACKGROUND`).
    pub fn validate_background_choice(&self, background_id: &str) -> BackgroundValidation {
        let mut result = BackgroundValidation {
            outcome: ValidationOutcome::new(),
            skill_proficiencies: Vec::new(),
            language_count: 0,
            starting_equipment: Vec::new(),
        };

        let Some(background_id) = present(background_id) else {
            result.outcome.push_error(
                "background_id",
                ValidationCode::Required,
                "Background is required",
            );
            return result;
        };

        match self.rule_data.get_background_data(background_id) {
            Ok(background) => {
                result.skill_proficiencies = background.skill_proficiencies;
                result.language_count = background.language_count;
                result.starting_equipment = background.starting_equipment;
            }
            Err(e) if e.is_not_found() => {
                result.outcome.push_error(
                    "background_id",
                    ValidationCode::NotFound,
                    format!("Background not found: {}", background_id),
                );
            }
            Err(e) => {
                tracing::warn!(background_id = %background_id, error = %e, "Failed to resolve background");
                result.outcome.push_error(
                    "background_id",
                    ValidationCode::InvalidBackground,
                    format!("Invalid background: {}", background_id),
                );
            }
        }

        result
    }
}
