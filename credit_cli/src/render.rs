//! Plain-text rendering for the terminal.

use credit_core::{Category, Course, Report, RequirementMode, RequirementSet};
use std::fmt::Write;

pub fn requirements_table(mode: RequirementMode, requirements: &RequirementSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Required credits ({}) ---", mode);
    for (category, credits) in requirements.iter() {
        let _ = writeln!(out, "{}: {} credits", category, credits);
    }
    out
}

/// Numbered course list for one category
pub fn category_listing(category: Category, courses: &[Course]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n[{}]", category);
    if courses.is_empty() {
        let _ = writeln!(out, "(no courses listed)");
    }
    for (i, course) in courses.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({} credits)", i + 1, course.name, course.credit);
    }
    out
}

pub fn report(report: &Report, show_untaken: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Results ({}) ===", report.mode);

    for row in &report.categories {
        match row.overflow {
            Some(overflow) => {
                let _ = writeln!(
                    out,
                    "{}: need {} / got {} (B0 surplus +{} → effective {}) / remaining {}",
                    row.category,
                    row.need,
                    row.got,
                    overflow.surplus_b0,
                    overflow.effective_b1,
                    row.remaining
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{}: need {} / got {} / remaining {}",
                    row.category, row.need, row.got, row.remaining
                );
            }
        }

        if show_untaken && !row.untaken.is_empty() {
            let _ = writeln!(out, "→ Not yet taken:");
            for name in &row.untaken {
                let _ = writeln!(out, "   - {}", name);
            }
        }
    }

    let _ = writeln!(
        out,
        "\nTotal earned: {} / {}",
        report.total_earned, report.total_required
    );
    if report.is_satisfied() {
        let _ = writeln!(out, "✓ All {} requirements met.", report.mode);
    } else {
        let _ = writeln!(out, "Credits still needed: {}", report.total_remaining());
    }
    out
}
