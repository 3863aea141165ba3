#![forbid(unsafe_code)]

//! Core domain model and business logic for the credit tracker.
//!
//! This crate provides:
//! - Domain types (categories, courses, per-category maps)
//! - Credit aggregation and the B0 → B1 surplus rule
//! - Remaining-credit reports
//! - Text sources (catalog, requirements) and student records
//! - The selection step used by front ends

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod aggregate;
pub mod overflow;
pub mod report;
pub mod catalog;
pub mod requirements;
pub mod selection;
pub mod record;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use aggregate::aggregate;
pub use overflow::{reallocate, OverflowResult};
pub use report::{remaining_for, CategoryReport, Report};
pub use catalog::{load_catalog, parse_catalog};
pub use requirements::{load_requirements, parse_requirements, RequirementMode};
pub use selection::{select_all_by_numbers, select_by_names, select_by_numbers};
pub use record::{RecordStore, TextRecordStore};
