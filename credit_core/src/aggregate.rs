//! Credit aggregation: earned selection → per-category totals.

use crate::{EarnedSelection, EarnedTotals};

/// Sum the credits of each category's completed courses.
///
/// Every category appears in the result; an empty list yields 0.
/// Sums saturate at `u32::MAX`.
pub fn aggregate(selection: &EarnedSelection) -> EarnedTotals {
    selection.map(|_, courses| {
        courses
            .iter()
            .fold(0u32, |total, course| total.saturating_add(course.credit))
    })
}
