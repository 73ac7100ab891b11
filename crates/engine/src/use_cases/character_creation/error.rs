//! Character creation operation errors.

use crate::infrastructure::ports::RuleDataError;
use charforge_domain::DomainError;

/// Errors that abort a character creation operation.
///
/// Rule violations are never reported here; they are collected into a
/// [`ValidationOutcome`](charforge_domain::ValidationOutcome).
#[derive(Debug, thiserror::Error)]
pub enum CharacterCreationError {
    /// A value required for the operation was not supplied.
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Rule data error: {0}")]
    RuleData(#[from] RuleDataError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
