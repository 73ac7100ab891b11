//! Value objects - Immutable objects defined by their attributes

mod ability;
mod derived_stats;
mod dice;
mod names;
mod skill;

pub use ability::{Ability, AbilityScoreMethod, AbilityScores};
pub use derived_stats::DerivedStats;
pub use dice::{DiceFormula, DiceParseError, HitDie, DEFAULT_HIT_DIE, HIT_DIE_SIZES};
pub use names::CharacterName;
pub use skill::{normalize_skill_id, skill_display_name, Skill};
