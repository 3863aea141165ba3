//! Course catalog sources.
//!
//! A catalog file is split into `[<category>]` sections, each followed by
//! `<course name> <credits>` lines:
//!
//! ```text
//! [A]
//! Calculus I 3
//! Linear Algebra 2
//!
//! [B0]
//! Programming Basics 2
//! ```
//!
//! The credit is the last whitespace-separated token, so course names may
//! contain spaces.

use crate::{Catalog, Category, Course, Error, Result};
use std::path::Path;

/// Parse catalog text
///
/// Blank lines are ignored. Lines that do not parse, lines before the first
/// header and lines under an unrecognised header are skipped. A header that
/// appears again starts that category's list over.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::default();
    let mut current: Option<Category> = None;

    for (line_num, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = section_header(line) {
            current = match header.parse::<Category>() {
                Ok(category) => {
                    catalog.get_mut(category).clear();
                    Some(category)
                }
                Err(e) => {
                    tracing::warn!(
                        "Catalog line {}: {}; skipping its courses",
                        line_num + 1,
                        e
                    );
                    None
                }
            };
            continue;
        }

        let Some(category) = current else {
            tracing::warn!(
                "Catalog line {} is outside a known section: {:?}",
                line_num + 1,
                line
            );
            continue;
        };

        match parse_course_line(line) {
            Some(course) => catalog.get_mut(category).push(course),
            None => {
                tracing::warn!("Skipping malformed catalog line {}: {:?}", line_num + 1, line);
            }
        }
    }

    tracing::debug!("Parsed catalog with {} courses", catalog.course_count());
    catalog
}

/// Load a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::MissingSource {
            kind: "Catalog",
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let catalog = parse_catalog(&String::from_utf8_lossy(&bytes));
    tracing::info!("Loaded catalog from {:?}", path);
    Ok(catalog)
}

fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// `<name> <credit>`, split at the last whitespace run
fn parse_course_line(line: &str) -> Option<Course> {
    let (name, credit) = line.rsplit_once(char::is_whitespace)?;
    let credit = credit.parse::<u32>().ok()?;
    Some(Course::new(name.trim_end(), credit))
}
