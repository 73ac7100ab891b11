//! Charforge Engine library.
//!
//! Validation and derived-stat calculation for characters under creation.
//!
//! ## Structure
//!
//! - `use_cases/` - Character creation validators, draft composer, stat calculator
//! - `infrastructure/` - Rule data port plus in-memory, JSON and cached providers

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::ports::{RuleDataError, RuleDataProvider, RuleKind};
pub use infrastructure::rule_data::{
    build_rule_data_provider, CachedRuleData, InMemoryRuleData, JsonRuleData,
};
pub use infrastructure::settings::EngineSettings;
pub use use_cases::character_creation::{CharacterCreation, CharacterCreationError};
