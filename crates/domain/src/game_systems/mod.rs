//! Game system rules used during character creation.
//!
//! Only D&D 5th Edition is supported; its tables and formulas live in
//! `dnd5e`.

pub mod dnd5e;

pub use dnd5e::{ability_modifier, point_buy_cost, proficiency_bonus};
