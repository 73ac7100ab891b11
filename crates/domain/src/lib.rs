//! Character creation domain: value objects, rule records, the draft and
//! finalized character aggregates, validation records, and the 5e rule tables.
//!
//! This crate performs no I/O. Rule data arrives from the engine's provider
//! port; everything here is pure data and arithmetic.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use aggregates::{Character, CharacterDraft};
pub use entities::{BackgroundData, ClassData, RaceData, SubraceData};
pub use error::DomainError;
pub use ids::{CharacterId, DraftId};
pub use validation::{
    CreationStep, DraftValidationReport, ValidationCode, ValidationError, ValidationOutcome,
    ValidationWarning,
};
pub use value_objects::{
    normalize_skill_id, skill_display_name, Ability, AbilityScoreMethod, AbilityScores,
    CharacterName, DerivedStats, DiceFormula, DiceParseError, HitDie, Skill,
};
