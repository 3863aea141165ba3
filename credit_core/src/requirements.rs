//! Requirement sources and requirement modes.
//!
//! A requirement file holds one `<category> <credits>` pair per line.
//! Lines that do not parse are skipped, not reported as errors.

use crate::{Category, Error, RequirementSet, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which threshold the student is checked against
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequirementMode {
    /// Advancing to the next year
    Promotion,
    Graduation,
}

impl RequirementMode {
    pub fn label(self) -> &'static str {
        match self {
            RequirementMode::Promotion => "promotion",
            RequirementMode::Graduation => "graduation",
        }
    }
}

impl fmt::Display for RequirementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RequirementMode {
    type Err = Error;

    /// Accepts `p` / `promotion` and `g` / `graduation`, any case
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "p" | "promotion" => Ok(RequirementMode::Promotion),
            "g" | "graduation" => Ok(RequirementMode::Graduation),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Parse requirement text into a `RequirementSet`
///
/// Only lines with exactly two whitespace-separated tokens, a recognised
/// category and a non-negative integer are used. A category listed twice
/// keeps its last value; unlisted categories require 0.
pub fn parse_requirements(text: &str) -> RequirementSet {
    let mut requirements = RequirementSet::default();

    for (line_num, line) in text.lines().enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [category, credits] = parts.as_slice() else {
            if !parts.is_empty() {
                tracing::warn!(
                    "Skipping malformed requirement line {}: {:?}",
                    line_num + 1,
                    line
                );
            }
            continue;
        };

        let category = match category.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                tracing::warn!("Skipping requirement line {}: {}", line_num + 1, e);
                continue;
            }
        };

        match credits.parse::<u32>() {
            Ok(credits) => requirements.set(category, credits),
            Err(e) => {
                tracing::warn!(
                    "Skipping requirement line {}: bad credit {:?}: {}",
                    line_num + 1,
                    credits,
                    e
                );
            }
        }
    }

    requirements
}

/// Load a requirement file
///
/// Unlike a student record, a missing requirement file is an error.
pub fn load_requirements(path: &Path) -> Result<RequirementSet> {
    if !path.exists() {
        return Err(Error::MissingSource {
            kind: "Requirement",
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let requirements = parse_requirements(&String::from_utf8_lossy(&bytes));
    tracing::info!("Loaded requirements from {:?}", path);
    Ok(requirements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_requirements() {
        let requirements = parse_requirements("A 20\nB0 10\nB1 8\nC 4\n");

        assert_eq!(requirements[Category::A], 20);
        assert_eq!(requirements[Category::B0], 10);
        assert_eq!(requirements[Category::B1], 8);
        assert_eq!(requirements[Category::C], 4);
        // Absent categories default to zero
        assert_eq!(requirements[Category::D], 0);
        assert_eq!(requirements[Category::E], 0);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        crate::logging::init_test();

        let text = "\
A 20
this line is junk
B0
B1 eight
C -4
Z 3

   D    6   
";
        let requirements = parse_requirements(text);

        assert_eq!(requirements[Category::A], 20);
        assert_eq!(requirements[Category::B0], 0);
        assert_eq!(requirements[Category::B1], 0);
        assert_eq!(requirements[Category::C], 0);
        assert_eq!(requirements[Category::D], 6);
    }

    #[test]
    fn test_repeated_category_keeps_last_value() {
        let requirements = parse_requirements("E 2\nE 5\n");
        assert_eq!(requirements[Category::E], 5);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("p".parse::<RequirementMode>().unwrap(), RequirementMode::Promotion);
        assert_eq!(" G ".parse::<RequirementMode>().unwrap(), RequirementMode::Graduation);
        assert_eq!(
            "Graduation".parse::<RequirementMode>().unwrap(),
            RequirementMode::Graduation
        );
        assert!(matches!(
            "x".parse::<RequirementMode>(),
            Err(Error::UnknownMode(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("requirements1.txt");

        let result = load_requirements(&path);
        assert!(matches!(result, Err(Error::MissingSource { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("requirements2.txt");
        std::fs::write(&path, "A 12\nB1 3\n").unwrap();

        let requirements = load_requirements(&path).unwrap();
        assert_eq!(requirements[Category::A], 12);
        assert_eq!(requirements[Category::B1], 3);
    }
}
