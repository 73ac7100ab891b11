//! D&D 5th Edition character-creation rules.
//!
//! Fixed tables and arithmetic shared by the validators and the stat
//! calculator. Tables are plain statics so a ruleset variant only has to swap
//! data, not logic.

use crate::value_objects::HitDie;

/// The six values of the standard array, highest first.
pub const STANDARD_ARRAY: [u8; 6] = [15, 14, 13, 12, 10, 8];

/// Total points available under point buy.
pub const POINT_BUY_BUDGET: u32 = 27;
pub const POINT_BUY_MIN: u8 = 8;
pub const POINT_BUY_MAX: u8 = 15;

/// Cost of each purchasable score under point buy.
pub static POINT_BUY_COSTS: [(u8, u32); 8] = [
    (8, 0),
    (9, 1),
    (10, 2),
    (11, 3),
    (12, 4),
    (13, 5),
    (14, 7),
    (15, 9),
];

/// Bounds for manually entered scores.
pub const MANUAL_SCORE_MIN: u8 = 3;
pub const MANUAL_SCORE_MAX: u8 = 18;

/// Bounds for scores on a finalized character (racial bonuses included).
pub const CHARACTER_SCORE_MIN: u8 = 3;
pub const CHARACTER_SCORE_MAX: u8 = 20;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 20;

/// Armor class before armor, shields or other effects.
pub const BASE_ARMOR_CLASS: i32 = 10;

/// Point-buy cost of a single score, or `None` if the score cannot be bought.
pub fn point_buy_cost(score: u8) -> Option<u32> {
    POINT_BUY_COSTS
        .iter()
        .find(|(value, _)| *value == score)
        .map(|(_, cost)| *cost)
}

/// Ability modifier: floor((score - 10) / 2).
///
/// Rust's `/` truncates toward zero, so `div_euclid` is used to get a true
/// floor for odd scores below 10 (score 9 is -1, not 0).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Proficiency bonus for a character level.
///
/// Levels below 1 are not a valid character state and yield 0.
pub fn proficiency_bonus(level: i32) -> i32 {
    if level <= 0 {
        return 0;
    }
    2 + (level - 1) / 4
}

/// Maximum hit points for a single-class character.
///
/// First level: maximum hit die + CON modifier.
/// Each later level: fixed average (half the die + 1) + CON modifier.
pub fn max_hit_points(hit_die: HitDie, level: u8, constitution_modifier: i32) -> i32 {
    let first_level_hp = hit_die.max() + constitution_modifier;
    let later_levels = (level.max(1) - 1) as i32;
    first_level_hp + later_levels * (hit_die.average_rounded_up() + constitution_modifier)
}

/// Unarmored armor class.
pub fn unarmored_armor_class(dexterity_modifier: i32) -> i32 {
    BASE_ARMOR_CLASS + dexterity_modifier
}
