//! Validation records for character creation
//!
//! Rule violations are data, not errors: every validator returns a
//! [`ValidationOutcome`] that accumulates field-level errors and warnings so
//! the caller always receives the full picture instead of the first failure.
//!
//! - **Errors** make the subject invalid.
//! - **Warnings** flag legal but sub-optimal choices and never affect validity.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Codes
// =============================================================================

/// Machine-readable reason attached to every error and warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    Required,
    InvalidMethod,
    InvalidStandardArray,
    InvalidPointBuyRange,
    PointBuyExceeded,
    UnspentPoints,
    InvalidAbilityScoreRange,
    InvalidRace,
    InvalidSubrace,
    InvalidClass,
    InvalidBackground,
    NotFound,
    DuplicateSkill,
    BackgroundSkillNotChoice,
    InvalidSkillChoice,
    IncorrectSkillCount,
    SkillOverlap,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::InvalidMethod => "INVALID_METHOD",
            Self::InvalidStandardArray => "INVALID_STANDARD_ARRAY",
            Self::InvalidPointBuyRange => "INVALID_POINT_BUY_RANGE",
            Self::PointBuyExceeded => "POINT_BUY_EXCEEDED",
            Self::UnspentPoints => "UNSPENT_POINTS",
            Self::InvalidAbilityScoreRange => "INVALID_ABILITY_SCORE_RANGE",
            Self::InvalidRace => "INVALID_RACE",
            Self::InvalidSubrace => "INVALID_SUBRACE",
            Self::InvalidClass => "INVALID_CLASS",
            Self::InvalidBackground => "INVALID_BACKGROUND",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateSkill => "DUPLICATE_SKILL",
            Self::BackgroundSkillNotChoice => "BACKGROUND_SKILL_NOT_CHOICE",
            Self::InvalidSkillChoice => "INVALID_SKILL_CHOICE",
            Self::IncorrectSkillCount => "INCORRECT_SKILL_COUNT",
            Self::SkillOverlap => "SKILL_OVERLAP",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Records
// =============================================================================

/// A rule violation on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Field the error applies to (e.g., "race_id", "ability_scores.strength")
    pub field: String,
    /// Human-readable message
    pub message: String,
    pub code: ValidationCode,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}: {}", self.code, self.field, self.message)
    }
}

/// A legal but questionable choice on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub code: ValidationCode,
}

impl ValidationWarning {
    pub fn new(field: impl Into<String>, code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: {}: {}", self.code, self.field, self.message)
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// Accumulated errors and warnings for one validation.
///
/// Starts valid; becomes invalid as soon as an error is pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    is_valid: bool,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// An outcome holding a single error.
    pub fn failed(field: impl Into<String>, code: ValidationCode, message: impl Into<String>) -> Self {
        let mut outcome = Self::new();
        outcome.push_error(field, code, message);
        outcome
    }

    pub fn push_error(
        &mut self,
        field: impl Into<String>,
        code: ValidationCode,
        message: impl Into<String>,
    ) {
        self.errors.push(ValidationError::new(field, code, message));
        self.is_valid = false;
    }

    pub fn push_warning(
        &mut self,
        field: impl Into<String>,
        code: ValidationCode,
        message: impl Into<String>,
    ) {
        self.warnings
            .push(ValidationWarning::new(field, code, message));
    }

    /// Append another outcome's errors and warnings after this one's.
    pub fn merge(&mut self, other: ValidationOutcome) {
        if !other.errors.is_empty() {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn has_error(&self, code: ValidationCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn has_warning(&self, code: ValidationCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Whether any error is reported against `field`.
    pub fn has_error_on(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Keep only the errors matching `keep`; validity follows what remains.
    pub fn retain_errors(&mut self, keep: impl FnMut(&ValidationError) -> bool) {
        self.errors.retain(keep);
        self.is_valid = self.errors.is_empty();
    }

    pub fn into_parts(self) -> (Vec<ValidationError>, Vec<ValidationWarning>) {
        (self.errors, self.warnings)
    }
}

// =============================================================================
// Draft Report
// =============================================================================

/// A section of the draft that must be filled in before finalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationStep {
    Name,
    Race,
    Class,
    AbilityScores,
    Background,
    Skills,
}

impl CreationStep {
    /// All steps in the order they are reported.
    pub const ALL: [CreationStep; 6] = [
        CreationStep::Name,
        CreationStep::Race,
        CreationStep::Class,
        CreationStep::AbilityScores,
        CreationStep::Background,
        CreationStep::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Race => "race",
            Self::Class => "class",
            Self::AbilityScores => "ability_scores",
            Self::Background => "background",
            Self::Skills => "skills",
        }
    }
}

impl fmt::Display for CreationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate report for a whole draft.
///
/// `is_complete` and `is_valid` are independent: a half-built draft can be
/// valid, and a fully filled-in draft can still break a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftValidationReport {
    pub is_complete: bool,
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub missing_steps: Vec<CreationStep>,
}

impl DraftValidationReport {
    pub fn new(missing_steps: Vec<CreationStep>, outcome: ValidationOutcome) -> Self {
        let is_valid = outcome.is_valid();
        let (errors, warnings) = outcome.into_parts();
        Self {
            is_complete: missing_steps.is_empty(),
            is_valid,
            errors,
            warnings,
            missing_steps,
        }
    }

    pub fn has_error(&self, code: ValidationCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn has_warning(&self, code: ValidationCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_starts_valid() {
        let outcome = ValidationOutcome::new();
        assert!(outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn warnings_do_not_invalidate() {
        let mut outcome = ValidationOutcome::new();
        outcome.push_warning("ability_scores", ValidationCode::UnspentPoints, "3 points unspent");
        assert!(outcome.is_valid());
        assert!(outcome.has_warning(ValidationCode::UnspentPoints));
    }

    #[test]
    fn errors_invalidate() {
        let outcome = ValidationOutcome::failed("race_id", ValidationCode::Required, "race is required");
        assert!(!outcome.is_valid());
        assert!(outcome.has_error(ValidationCode::Required));
    }

    #[test]
    fn merge_preserves_order_and_validity() {
        let mut first = ValidationOutcome::failed("race_id", ValidationCode::InvalidRace, "unknown race");
        let mut second = ValidationOutcome::new();
        second.push_warning("skills", ValidationCode::SkillOverlap, "overlap");
        second.push_error("class_id", ValidationCode::InvalidClass, "unknown class");
        first.merge(second);

        assert!(!first.is_valid());
        let codes: Vec<ValidationCode> = first.errors().iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![ValidationCode::InvalidRace, ValidationCode::InvalidClass]);
        assert_eq!(first.warnings().len(), 1);
    }

    #[test]
    fn retaining_errors_recomputes_validity() {
        let mut outcome = ValidationOutcome::failed("class_id", ValidationCode::InvalidClass, "unknown class");
        outcome.push_warning("skills", ValidationCode::SkillOverlap, "overlap");
        assert!(outcome.has_error_on("class_id"));

        outcome.retain_errors(|e| e.field != "class_id");
        assert!(outcome.is_valid());
        assert!(!outcome.has_error_on("class_id"));
        assert_eq!(outcome.warnings().len(), 1);

        let mut outcome = ValidationOutcome::failed("skills", ValidationCode::IncorrectSkillCount, "too few");
        outcome.retain_errors(|e| e.field != "class_id");
        assert!(!outcome.is_valid());
    }

    #[test]
    fn merging_a_valid_outcome_keeps_validity() {
        let mut outcome = ValidationOutcome::new();
        outcome.merge(ValidationOutcome::new());
        assert!(outcome.is_valid());
    }

    #[test]
    fn codes_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&ValidationCode::BackgroundSkillNotChoice).unwrap();
        assert_eq!(json, "\"BACKGROUND_SKILL_NOT_CHOICE\"");
        assert_eq!(
            ValidationCode::BackgroundSkillNotChoice.as_str(),
            "BACKGROUND_SKILL_NOT_CHOICE"
        );
    }

    #[test]
    fn report_flags_are_independent() {
        let report = DraftValidationReport::new(vec![CreationStep::Skills], ValidationOutcome::new());
        assert!(report.is_valid);
        assert!(!report.is_complete);

        let report = DraftValidationReport::new(
            Vec::new(),
            ValidationOutcome::failed("class_id", ValidationCode::InvalidClass, "unknown class"),
        );
        assert!(!report.is_valid);
        assert!(report.is_complete);
    }

    #[test]
    fn step_serialization() {
        let json = serde_json::to_string(&CreationStep::AbilityScores).unwrap();
        assert_eq!(json, "\"ability_scores\"");
    }
}
