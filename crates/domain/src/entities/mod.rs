//! Domain entities - Rule records with identity

mod rule_data;

pub use rule_data::{BackgroundData, ClassData, RaceData, SubraceData};
