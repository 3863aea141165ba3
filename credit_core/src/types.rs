//! Core domain types for the credit tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Categories and the fixed category universe
//! - Courses
//! - `CategoryMap`, the total per-category mapping behind catalogs,
//!   requirement sets, earned selections and earned totals

use crate::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

// ============================================================================
// Categories
// ============================================================================

const CATEGORY_COUNT: usize = 6;

/// A coursework category.
///
/// Variant order is the reporting order, so `Ord` sorts A, B0, B1, C, D, E.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    A,
    B0,
    B1,
    C,
    D,
    E,
}

impl Category {
    /// Every recognised category, in reporting order
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::A,
        Category::B0,
        Category::B1,
        Category::C,
        Category::D,
        Category::E,
    ];

    /// The identifier used in text sources and records
    pub fn as_str(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B0 => "B0",
            Category::B1 => "B1",
            Category::C => "C",
            Category::D => "D",
            Category::E => "E",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Courses
// ============================================================================

/// A course and the credit it is worth
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub credit: u32,
}

impl Course {
    pub fn new(name: impl Into<String>, credit: u32) -> Self {
        Self {
            name: name.into(),
            credit,
        }
    }
}

// ============================================================================
// Per-category mapping
// ============================================================================

/// A mapping with exactly one value for every recognised category.
///
/// Absent keys cannot exist: construction always fills every slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryMap<T> {
    slots: [T; CATEGORY_COUNT],
}

impl<T> CategoryMap<T> {
    /// Build a map by computing the value for each category
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|i| f(Category::ALL[i])),
        }
    }

    pub fn get(&self, category: Category) -> &T {
        &self.slots[category.index()]
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        &mut self.slots[category.index()]
    }

    pub fn set(&mut self, category: Category, value: T) {
        self.slots[category.index()] = value;
    }

    /// Iterate `(category, value)` pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> + '_ {
        Category::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> CategoryMap<U> {
        CategoryMap::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T: Default> Default for CategoryMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        self.get(category)
    }
}

/// Later pairs for the same category replace earlier ones; categories
/// never mentioned keep their default.
impl<T: Default> FromIterator<(Category, T)> for CategoryMap<T> {
    fn from_iter<I: IntoIterator<Item = (Category, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (category, value) in iter {
            map.set(category, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for CategoryMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(c, v)| (c.as_str(), v)))
    }
}

impl CategoryMap<Vec<Course>> {
    /// Every course paired with its category, in category then list order
    pub fn courses(&self) -> impl Iterator<Item = (Category, &Course)> + '_ {
        self.iter()
            .flat_map(|(category, courses)| courses.iter().map(move |c| (category, c)))
    }

    pub fn course_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

/// Category → available courses. Built once per session.
pub type Catalog = CategoryMap<Vec<Course>>;

/// Category → courses the student has completed.
pub type EarnedSelection = CategoryMap<Vec<Course>>;

/// Category → required credits.
pub type RequirementSet = CategoryMap<u32>;

/// Category → credits earned, derived from an `EarnedSelection`.
pub type EarnedTotals = CategoryMap<u32>;
