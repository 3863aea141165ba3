//! The selection step: turning user choices into an `EarnedSelection`.
//!
//! Selected courses are cloned out of the catalog, so their credit always
//! matches the catalog entry they were picked from.

use crate::{Catalog, Category, Course, EarnedSelection};
use std::collections::HashSet;

/// Pick courses by 1-based position from a whitespace-separated list.
///
/// Tokens that are not numbers or fall outside the list are ignored.
/// A number given twice selects that course twice.
pub fn select_by_numbers(courses: &[Course], input: &str) -> Vec<Course> {
    let mut selected = Vec::new();

    for token in input.split_whitespace() {
        let Ok(number) = token.parse::<usize>() else {
            tracing::debug!("Ignoring non-numeric selection {:?}", token);
            continue;
        };

        match number.checked_sub(1).and_then(|idx| courses.get(idx)) {
            Some(course) => selected.push(course.clone()),
            None => tracing::debug!("Ignoring out-of-range selection {}", number),
        }
    }

    selected
}

/// Pick every catalog course whose name is among `names`, in catalog order.
pub fn select_by_names<S: AsRef<str>>(courses: &[Course], names: &[S]) -> Vec<Course> {
    let wanted: HashSet<&str> = names.iter().map(|name| name.as_ref()).collect();
    courses
        .iter()
        .filter(|course| wanted.contains(course.name.as_str()))
        .cloned()
        .collect()
}

/// Build a full selection by asking `input_for` for each category's numbers.
///
/// Categories are visited in reporting order. Returning `None` for a
/// category selects nothing from it.
pub fn select_all_by_numbers<F>(catalog: &Catalog, mut input_for: F) -> EarnedSelection
where
    F: FnMut(Category, &[Course]) -> Option<String>,
{
    EarnedSelection::from_fn(|category| {
        let courses = catalog.get(category);
        match input_for(category, courses) {
            Some(input) => select_by_numbers(courses, &input),
            None => Vec::new(),
        }
    })
}
