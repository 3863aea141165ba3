//! B0 → B1 surplus reallocation.
//!
//! Credits earned in B0 beyond B0's own requirement count toward B1.
//! This is a single one-way rule between exactly these two categories:
//! the surplus is never capped by B1's need, and whatever B1 does not use
//! is dropped rather than returned to B0 or passed anywhere else.

use crate::{Category, EarnedTotals, RequirementSet};
use serde::{Deserialize, Serialize};

/// Outcome of applying the B0 surplus to B1
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverflowResult {
    /// Credits earned in B0 above its requirement
    pub surplus_b0: u32,
    /// B1's earned credits plus the whole B0 surplus
    pub effective_b1: u32,
    /// What B1 still lacks after the surplus is applied
    pub remaining_b1: u32,
}

/// Compute how much of B0's surplus offsets B1's deficit.
pub fn reallocate(requirements: &RequirementSet, earned: &EarnedTotals) -> OverflowResult {
    let need_b0 = requirements[Category::B0];
    let need_b1 = requirements[Category::B1];
    let got_b0 = earned[Category::B0];
    let got_b1 = earned[Category::B1];

    let surplus_b0 = got_b0.saturating_sub(need_b0);
    let effective_b1 = got_b1.saturating_add(surplus_b0);
    let remaining_b1 = need_b1.saturating_sub(effective_b1);

    tracing::debug!(
        surplus_b0,
        effective_b1,
        remaining_b1,
        "Applied B0 surplus to B1"
    );

    OverflowResult {
        surplus_b0,
        effective_b1,
        remaining_b1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(need_b0: u32, need_b1: u32, got_b0: u32, got_b1: u32) -> OverflowResult {
        let requirements: RequirementSet = vec![(Category::B0, need_b0), (Category::B1, need_b1)]
            .into_iter()
            .collect();
        let earned: EarnedTotals = vec![(Category::B0, got_b0), (Category::B1, got_b1)]
            .into_iter()
            .collect();
        reallocate(&requirements, &earned)
    }

    fn result(surplus_b0: u32, effective_b1: u32, remaining_b1: u32) -> OverflowResult {
        OverflowResult {
            surplus_b0,
            effective_b1,
            remaining_b1,
        }
    }

    #[test]
    fn test_partial_surplus_reduces_b1_deficit() {
        assert_eq!(run(10, 8, 12, 3), result(2, 5, 3));
    }

    #[test]
    fn test_b0_short_shares_nothing() {
        assert_eq!(run(10, 8, 6, 8), result(0, 8, 0));
    }

    #[test]
    fn test_excess_surplus_is_not_capped() {
        // 15 surplus against a 5 credit need: the extra 10 is simply unused
        assert_eq!(run(5, 5, 20, 0), result(15, 15, 0));
    }

    #[test]
    fn test_all_zero_inputs() {
        assert_eq!(
            reallocate(&RequirementSet::default(), &EarnedTotals::default()),
            OverflowResult::default()
        );
    }

    #[test]
    fn test_other_categories_are_ignored() {
        let requirements: RequirementSet = vec![(Category::A, 30), (Category::B1, 4)]
            .into_iter()
            .collect();
        let earned: EarnedTotals = vec![(Category::A, 50), (Category::C, 9)]
            .into_iter()
            .collect();
        assert_eq!(reallocate(&requirements, &earned), result(0, 0, 4));
    }

    #[test]
    fn test_no_surplus_when_b0_at_or_below_need() {
        for need_b0 in 0..12 {
            for got_b0 in 0..=need_b0 {
                for got_b1 in [0, 3, 10] {
                    let r = run(need_b0, 7, got_b0, got_b1);
                    assert_eq!(r.surplus_b0, 0);
                    assert_eq!(r.effective_b1, got_b1);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_got_b0() {
        for need_b0 in [0, 4, 10] {
            for need_b1 in [0, 6, 15] {
                for got_b1 in [0, 2, 20] {
                    let mut previous = run(need_b0, need_b1, 0, got_b1);
                    for got_b0 in 1..40 {
                        let current = run(need_b0, need_b1, got_b0, got_b1);
                        assert!(current.surplus_b0 >= previous.surplus_b0);
                        assert!(current.effective_b1 >= previous.effective_b1);
                        assert!(current.remaining_b1 <= previous.remaining_b1);
                        previous = current;
                    }
                }
            }
        }
    }

    #[test]
    fn test_remaining_never_exceeds_b1_need() {
        for got_b0 in 0..15 {
            for got_b1 in 0..15 {
                let r = run(5, 9, got_b0, got_b1);
                assert!(r.remaining_b1 <= 9);
                assert_eq!(r.effective_b1, got_b1 + got_b0.saturating_sub(5));
            }
        }
    }

    #[test]
    fn test_saturates_at_extremes() {
        let r = run(0, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(r, result(u32::MAX, u32::MAX, 0));
    }
}
