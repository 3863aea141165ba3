//! Error types for the credit_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for credit_core operations
///
/// The credit computation itself never fails; every variant here comes
/// from a collaborator (file sources, records, configuration, prompts).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Category identifier outside the recognised universe
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Requirement mode other than promotion or graduation
    #[error("Unknown requirement mode: {0} (expected 'p' or 'g')")]
    UnknownMode(String),

    /// Student identifier that cannot name a record file
    #[error("Invalid student id: {0:?}")]
    InvalidStudentId(String),

    /// A catalog or requirement file that must exist does not
    #[error("{kind} file not found: {}", path.display())]
    MissingSource { kind: &'static str, path: PathBuf },

    /// Interactive input problem (e.g. stdin closed mid-prompt)
    #[error("Input error: {0}")]
    Input(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
