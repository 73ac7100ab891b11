//! Aggregates - Entities that own the consistency of a whole character

mod character;
mod character_draft;

pub use character::Character;
pub use character_draft::CharacterDraft;
