//! Use cases - Character creation orchestration.
//!
//! Use cases resolve rule data through the provider port and run the domain
//! rules against it.

pub mod character_creation;

pub use character_creation::CharacterCreation;
