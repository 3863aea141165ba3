//! Persisted earned-selection records.
//!
//! Each student's completed courses live in `taken_<student_id>.txt`, one
//! `<category> <name> <credit>` line per course. The format is plain
//! whitespace-separated tokens, so a course name containing whitespace
//! cannot be read back from a record.
//!
//! Writes are atomic and locked, mirroring how the rest of the data
//! directory is handled.

use crate::{Category, Course, EarnedSelection, Error, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Storage for per-student earned selections
pub trait RecordStore {
    /// Returns `None` when the student has no saved record
    fn load(&self, student_id: &str) -> Result<Option<EarnedSelection>>;

    fn save(&mut self, student_id: &str, selection: &EarnedSelection) -> Result<()>;
}

/// Text-file record store rooted at a data directory
pub struct TextRecordStore {
    dir: PathBuf,
}

impl TextRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the record for `student_id`
    pub fn path_for(&self, student_id: &str) -> Result<PathBuf> {
        let id = validate_student_id(student_id)?;
        Ok(self.dir.join(format!("taken_{}.txt", id)))
    }
}

impl RecordStore for TextRecordStore {
    fn load(&self, student_id: &str) -> Result<Option<EarnedSelection>> {
        load_record(&self.path_for(student_id)?)
    }

    fn save(&mut self, student_id: &str, selection: &EarnedSelection) -> Result<()> {
        save_record(&self.path_for(student_id)?, selection)
    }
}

/// Check that a student id can safely name a record file.
///
/// Returns the id with surrounding whitespace removed.
pub fn validate_student_id(student_id: &str) -> Result<&str> {
    let id = student_id.trim();
    let invalid = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\'])
        || id.chars().any(char::is_control);

    if invalid {
        return Err(Error::InvalidStudentId(student_id.to_string()));
    }
    Ok(id)
}

/// Parse record text
///
/// Lines without exactly three tokens, with an unknown category or with a
/// non-integer credit are skipped.
pub fn parse_record(text: &str) -> EarnedSelection {
    let mut selection = EarnedSelection::default();

    for (line_num, line) in text.lines().enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [category, name, credit] = parts.as_slice() else {
            if !parts.is_empty() {
                tracing::warn!("Skipping malformed record line {}: {:?}", line_num + 1, line);
            }
            continue;
        };

        let (Ok(category), Ok(credit)) = (category.parse::<Category>(), credit.parse::<u32>())
        else {
            tracing::warn!("Skipping unreadable record line {}: {:?}", line_num + 1, line);
            continue;
        };

        selection.get_mut(category).push(Course::new(*name, credit));
    }

    selection
}

/// Render a selection in record format, categories in reporting order
pub fn format_record(selection: &EarnedSelection) -> String {
    let mut out = String::new();
    for (category, course) in selection.courses() {
        out.push_str(&format!("{} {} {}\n", category, course.name, course.credit));
    }
    out
}

/// Load a record file with shared locking
///
/// A missing file means "no prior data" and yields `Ok(None)`. An existing
/// file, even an empty one, yields a selection.
pub fn load_record(path: &Path) -> Result<Option<EarnedSelection>> {
    if !path.exists() {
        tracing::info!("No record found at {:?}", path);
        return Ok(None);
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let mut bytes = Vec::new();
    let read = std::io::BufReader::new(&file).read_to_end(&mut bytes);
    file.unlock()?;
    read?;

    let selection = parse_record(&String::from_utf8_lossy(&bytes));
    tracing::debug!(
        "Loaded record {:?} with {} courses",
        path,
        selection.course_count()
    );
    Ok(Some(selection))
}

/// Save a record with exclusive locking
///
/// Atomically writes the record by:
/// 1. Writing to a temp file in the same directory
/// 2. Syncing to disk
/// 3. Renaming over the original
pub fn save_record(path: &Path, selection: &EarnedSelection) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    for (category, course) in selection.courses() {
        if course.name.split_whitespace().count() != 1 {
            tracing::warn!(
                "Course {:?} in {} contains whitespace and will not load back from {:?}",
                course.name,
                category,
                path
            );
        }
    }

    let temp = NamedTempFile::new_in(dir)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        writer.write_all(format_record(selection).as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!(
        "Saved {} courses to {:?}",
        selection.course_count(),
        path
    );
    Ok(())
}
