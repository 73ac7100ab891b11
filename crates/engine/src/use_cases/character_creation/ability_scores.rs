//! Ability score validation.

use charforge_domain::game_systems::dnd5e::{
    point_buy_cost, MANUAL_SCORE_MAX, MANUAL_SCORE_MIN, POINT_BUY_BUDGET, POINT_BUY_MAX,
    POINT_BUY_MIN, STANDARD_ARRAY,
};
use charforge_domain::{AbilityScoreMethod, AbilityScores, ValidationCode, ValidationOutcome};

use super::CharacterCreation;

const FIELD: &str = "ability_scores";

/// Validate six ability scores against a generation method.
///
/// `method` is parsed leniently (`"point_buy"`, `"Point-Buy"` and
/// `"point buy"` are the same method).
pub fn validate_ability_scores(scores: Option<&AbilityScores>, method: &str) -> ValidationOutcome {
    let Some(scores) = scores else {
        return ValidationOutcome::failed(FIELD, ValidationCode::Required, "Ability scores are required");
    };
    let Ok(method) = method.parse::<AbilityScoreMethod>() else {
        return ValidationOutcome::failed(
            "ability_score_method",
            ValidationCode::InvalidMethod,
            format!("Unknown ability score method: {}", method),
        );
    };

    match method {
        AbilityScoreMethod::StandardArray => validate_standard_array(scores),
        AbilityScoreMethod::PointBuy => validate_point_buy(scores),
        AbilityScoreMethod::Manual => validate_manual(scores),
    }
}

fn validate_standard_array(scores: &AbilityScores) -> ValidationOutcome {
    let mut actual = scores.to_array();
    let mut expected = STANDARD_ARRAY;
    actual.sort_unstable();
    expected.sort_unstable();

    if actual == expected {
        return ValidationOutcome::new();
    }
    ValidationOutcome::failed(
        FIELD,
        ValidationCode::InvalidStandardArray,
        format!(
            "Ability scores must use the standard array {:?} exactly once each",
            STANDARD_ARRAY
        ),
    )
}

fn validate_point_buy(scores: &AbilityScores) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::new();
    let mut total = 0;

    for (ability, score) in scores.iter() {
        match point_buy_cost(score) {
            Some(cost) => total += cost,
            None => outcome.push_error(
                format!("{}.{}", FIELD, ability),
                ValidationCode::InvalidPointBuyRange,
                format!(
                    "{} must be between {} and {} for point buy, got {}",
                    ability.display_name(),
                    POINT_BUY_MIN,
                    POINT_BUY_MAX,
                    score
                ),
            ),
        }
    }

    // Out-of-range scores have no cost, so the total is only meaningful
    // when every score was priced.
    if !outcome.is_valid() {
        return outcome;
    }

    if total > POINT_BUY_BUDGET {
        outcome.push_error(
            FIELD,
            ValidationCode::PointBuyExceeded,
            format!(
                "Point buy total {} exceeds the budget of {}",
                total, POINT_BUY_BUDGET
            ),
        );
    } else if total < POINT_BUY_BUDGET {
        outcome.push_warning(
            FIELD,
            ValidationCode::UnspentPoints,
            format!(
                "{} of {} points unspent",
                POINT_BUY_BUDGET - total,
                POINT_BUY_BUDGET
            ),
        );
    }
    outcome
}

fn validate_manual(scores: &AbilityScores) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::new();
    for (ability, score) in scores.iter() {
        if !(MANUAL_SCORE_MIN..=MANUAL_SCORE_MAX).contains(&score) {
            outcome.push_error(
                format!("{}.{}", FIELD, ability),
                ValidationCode::InvalidAbilityScoreRange,
                format!(
                    "{} must be between {} and {}, got {}",
                    ability.display_name(),
                    MANUAL_SCORE_MIN,
                    MANUAL_SCORE_MAX,
                    score
                ),
            );
        }
    }
    outcome
}

impl CharacterCreation {
    /// See [`validate_ability_scores`].
    pub fn validate_ability_scores(
        &self,
        scores: Option<&AbilityScores>,
        method: &str,
    ) -> ValidationOutcome {
        validate_ability_scores(scores, method)
    }
}

#[cfg(test)]
mod tests {
    use charforge_domain::Ability;

    use super::*;

    fn scores(values: [u8; 6]) -> AbilityScores {
        AbilityScores::from_array(values)
    }

    fn codes(outcome: &ValidationOutcome) -> Vec<ValidationCode> {
        outcome.errors().iter().map(|e| e.code).collect()
    }

    /// Every permutation of `values` via Heap's algorithm.
    fn permutations(values: [u8; 6]) -> Vec<[u8; 6]> {
        fn heap(k: usize, values: &mut [u8; 6], out: &mut Vec<[u8; 6]>) {
            if k == 1 {
                out.push(*values);
                return;
            }
            heap(k - 1, values, out);
            for i in 0..k - 1 {
                if k % 2 == 0 {
                    values.swap(i, k - 1);
                } else {
                    values.swap(0, k - 1);
                }
                heap(k - 1, values, out);
            }
        }
        let mut values = values;
        let mut out = Vec::new();
        heap(6, &mut values, &mut out);
        out
    }

    #[test]
    fn missing_scores_are_required() {
        let outcome = validate_ability_scores(None, "standard_array");
        assert_eq!(codes(&outcome), vec![ValidationCode::Required]);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let outcome = validate_ability_scores(Some(&scores([10; 6])), "4d6_drop_lowest");
        assert_eq!(codes(&outcome), vec![ValidationCode::InvalidMethod]);
    }

    #[test]
    fn every_standard_array_assignment_is_valid() {
        let all = permutations([15, 14, 13, 12, 10, 8]);
        assert_eq!(all.len(), 720);
        for values in all {
            let outcome = validate_ability_scores(Some(&scores(values)), "standard_array");
            assert!(outcome.is_valid(), "{:?}", values);
            assert!(outcome.warnings().is_empty());
        }
    }

    #[test]
    fn other_multisets_fail_standard_array() {
        for values in [
            [15, 15, 13, 12, 10, 8],
            [15, 14, 13, 12, 10, 9],
            [8, 8, 8, 8, 8, 8],
            [16, 14, 13, 12, 10, 7],
        ] {
            let outcome = validate_ability_scores(Some(&scores(values)), "standard_array");
            assert_eq!(
                codes(&outcome),
                vec![ValidationCode::InvalidStandardArray],
                "{:?}",
                values
            );
        }
    }

    #[test]
    fn point_buy_costs_strictly_increase() {
        for score in 9..=15u8 {
            assert!(point_buy_cost(score - 1) < point_buy_cost(score));
        }
    }

    #[test]
    fn point_buy_full_budget_is_clean() {
        let outcome = validate_ability_scores(Some(&scores([15, 15, 15, 8, 8, 8])), "point_buy");
        assert!(outcome.is_valid());
        assert!(outcome.warnings().is_empty());
    }

    #[test]
    fn point_buy_under_budget_warns() {
        let outcome = validate_ability_scores(Some(&scores([13, 13, 13, 10, 10, 10])), "point_buy");
        assert!(outcome.is_valid());
        assert!(outcome.has_warning(ValidationCode::UnspentPoints));
        assert_eq!(outcome.warnings().len(), 1);
        assert!(outcome.warnings()[0].message.starts_with("6 of 27"));
    }

    #[test]
    fn point_buy_over_budget_fails() {
        let outcome = validate_ability_scores(Some(&scores([15, 15, 15, 15, 8, 8])), "point-buy");
        assert_eq!(codes(&outcome), vec![ValidationCode::PointBuyExceeded]);
        assert!(outcome.warnings().is_empty());
    }

    #[test]
    fn point_buy_range_errors_name_each_ability() {
        let outcome = validate_ability_scores(Some(&scores([16, 7, 10, 10, 10, 10])), "point_buy");
        assert_eq!(
            codes(&outcome),
            vec![ValidationCode::InvalidPointBuyRange, ValidationCode::InvalidPointBuyRange]
        );
        assert_eq!(outcome.errors()[0].field, "ability_scores.strength");
        assert_eq!(outcome.errors()[1].field, "ability_scores.dexterity");
        assert!(outcome.warnings().is_empty());
    }

    #[test]
    fn manual_bounds_are_inclusive() {
        let outcome = validate_ability_scores(Some(&scores([3, 18, 3, 18, 10, 10])), "manual");
        assert!(outcome.is_valid());
    }

    #[test]
    fn manual_out_of_range_scores_fail_independently() {
        let outcome = validate_ability_scores(Some(&scores([2, 19, 2, 19, 10, 10])), "manual");
        assert_eq!(codes(&outcome).len(), 4);
        assert!(codes(&outcome)
            .iter()
            .all(|c| *c == ValidationCode::InvalidAbilityScoreRange));

        let fields: Vec<&str> = outcome.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "ability_scores.strength",
                "ability_scores.dexterity",
                "ability_scores.constitution",
                "ability_scores.intelligence",
            ]
        );
    }

    #[test]
    fn manual_error_message_names_the_ability() {
        let mut values = scores([10; 6]);
        values.set(Ability::Wisdom, 19);
        let outcome = validate_ability_scores(Some(&values), "manual");
        assert!(outcome.errors()[0].message.starts_with("Wisdom"));
    }
}
