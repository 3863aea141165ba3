//! Remaining-credit reporting.
//!
//! Every category's shortfall is `need - got` floored at zero, except B1,
//! whose shortfall comes from the B0 overflow calculation. B0 itself is
//! reported with the plain rule even though it feeds B1.

use crate::{
    aggregate, reallocate, Catalog, Category, EarnedSelection, EarnedTotals, OverflowResult,
    RequirementMode, RequirementSet, Result,
};
use serde::Serialize;
use std::collections::HashSet;
use std::io;

/// Credits still needed in `category`
pub fn remaining_for(
    category: Category,
    requirements: &RequirementSet,
    earned: &EarnedTotals,
    overflow: &OverflowResult,
) -> u32 {
    match category {
        Category::B1 => overflow.remaining_b1,
        _ => requirements[category].saturating_sub(earned[category]),
    }
}

/// One category's line in a report
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: Category,
    pub need: u32,
    pub got: u32,
    pub remaining: u32,
    /// Present on the B1 row only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<OverflowResult>,
    /// Catalog courses in this category not yet taken
    pub untaken: Vec<String>,
}

/// Progress of one student against one requirement set
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub mode: RequirementMode,
    pub categories: Vec<CategoryReport>,
    pub total_required: u32,
    pub total_earned: u32,
}

impl Report {
    /// Aggregate the selection, apply the B0 overflow and compare against
    /// the requirements.
    pub fn build(
        mode: RequirementMode,
        requirements: &RequirementSet,
        catalog: &Catalog,
        selection: &EarnedSelection,
    ) -> Self {
        let earned = aggregate(selection);
        let overflow = reallocate(requirements, &earned);

        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let taken: HashSet<&str> = selection[category]
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect();
                let untaken = catalog[category]
                    .iter()
                    .filter(|c| !taken.contains(c.name.as_str()))
                    .map(|c| c.name.clone())
                    .collect();

                CategoryReport {
                    category,
                    need: requirements[category],
                    got: earned[category],
                    remaining: remaining_for(category, requirements, &earned, &overflow),
                    overflow: (category == Category::B1).then_some(overflow),
                    untaken,
                }
            })
            .collect();

        Report {
            mode,
            categories,
            total_required: saturating_total(requirements),
            total_earned: saturating_total(&earned),
        }
    }

    pub fn row(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|r| r.category == category)
    }

    /// True when no category has credits remaining
    pub fn is_satisfied(&self) -> bool {
        self.categories.iter().all(|r| r.remaining == 0)
    }

    pub fn total_remaining(&self) -> u32 {
        self.categories
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.remaining))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write one CSV row per category
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.categories {
            writer.serialize(CsvRow::from(row))?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn saturating_total(map: &crate::CategoryMap<u32>) -> u32 {
    map.iter().fold(0u32, |acc, (_, v)| acc.saturating_add(*v))
}

/// A row in the CSV output
#[derive(Debug, Serialize)]
struct CsvRow {
    category: Category,
    need: u32,
    got: u32,
    remaining: u32,
    surplus_b0: Option<u32>,
    effective_b1: Option<u32>,
}

impl From<&CategoryReport> for CsvRow {
    fn from(row: &CategoryReport) -> Self {
        CsvRow {
            category: row.category,
            need: row.need,
            got: row.got,
            remaining: row.remaining,
            surplus_b0: row.overflow.map(|o| o.surplus_b0),
            effective_b1: row.overflow.map(|o| o.effective_b1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Course;

    fn requirements() -> RequirementSet {
        vec![
            (Category::A, 10),
            (Category::B0, 10),
            (Category::B1, 8),
            (Category::C, 2),
        ]
        .into_iter()
        .collect()
    }

    fn catalog() -> Catalog {
        vec![
            (
                Category::A,
                vec![Course::new("Calculus", 4), Course::new("Physics", 4)],
            ),
            (
                Category::B0,
                vec![
                    Course::new("Programming", 6),
                    Course::new("Networks", 6),
                    Course::new("Databases", 2),
                ],
            ),
            (Category::B1, vec![Course::new("Algorithms", 3)]),
        ]
        .into_iter()
        .collect()
    }

    fn selection() -> EarnedSelection {
        let catalog = catalog();
        vec![
            (Category::A, vec![catalog[Category::A][0].clone()]),
            (
                Category::B0,
                vec![catalog[Category::B0][0].clone(), catalog[Category::B0][1].clone()],
            ),
            (Category::B1, catalog[Category::B1].clone()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_b1_uses_overflow_and_b0_uses_plain_rule() {
        let report = Report::build(
            RequirementMode::Graduation,
            &requirements(),
            &catalog(),
            &selection(),
        );

        let b0 = report.row(Category::B0).unwrap();
        assert_eq!((b0.need, b0.got, b0.remaining), (10, 12, 0));
        assert!(b0.overflow.is_none());

        let b1 = report.row(Category::B1).unwrap();
        assert_eq!((b1.need, b1.got, b1.remaining), (8, 3, 3));
        assert_eq!(
            b1.overflow,
            Some(OverflowResult {
                surplus_b0: 2,
                effective_b1: 5,
                remaining_b1: 3,
            })
        );
    }

    #[test]
    fn test_plain_categories_floor_at_zero() {
        let report = Report::build(
            RequirementMode::Promotion,
            &requirements(),
            &catalog(),
            &selection(),
        );

        assert_eq!(report.row(Category::A).unwrap().remaining, 6);
        assert_eq!(report.row(Category::C).unwrap().remaining, 2);
        assert_eq!(report.row(Category::E).unwrap().remaining, 0);
    }

    #[test]
    fn test_rows_follow_reporting_order() {
        let report = Report::build(
            RequirementMode::Graduation,
            &RequirementSet::default(),
            &Catalog::default(),
            &EarnedSelection::default(),
        );
        let order: Vec<_> = report.categories.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert!(report.is_satisfied());
    }

    #[test]
    fn test_untaken_lists_catalog_order() {
        let report = Report::build(
            RequirementMode::Graduation,
            &requirements(),
            &catalog(),
            &selection(),
        );

        assert_eq!(report.row(Category::A).unwrap().untaken, vec!["Physics"]);
        assert_eq!(report.row(Category::B0).unwrap().untaken, vec!["Databases"]);
        assert!(report.row(Category::B1).unwrap().untaken.is_empty());
    }

    #[test]
    fn test_totals_and_satisfaction() {
        let report = Report::build(
            RequirementMode::Graduation,
            &requirements(),
            &catalog(),
            &selection(),
        );

        assert_eq!(report.total_required, 30);
        assert_eq!(report.total_earned, 19);
        assert_eq!(report.total_remaining(), 6 + 3 + 2);
        assert!(!report.is_satisfied());
    }

    #[test]
    fn test_json_output() {
        let report = Report::build(
            RequirementMode::Promotion,
            &requirements(),
            &catalog(),
            &selection(),
        );
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["mode"], "promotion");
        assert_eq!(json["categories"][2]["category"], "B1");
        assert_eq!(json["categories"][2]["overflow"]["surplus_b0"], 2);
        assert!(json["categories"][1].get("overflow").is_none());
    }

    #[test]
    fn test_csv_output() {
        let report = Report::build(
            RequirementMode::Graduation,
            &requirements(),
            &catalog(),
            &selection(),
        );
        let mut buf = Vec::new();
        report.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "category,need,got,remaining,surplus_b0,effective_b1");
        assert_eq!(lines[1], "A,10,4,6,,");
        assert_eq!(lines[3], "B1,8,3,3,2,5");
        assert_eq!(lines.len(), 7);
    }
}
