//! Line-oriented exercise and answer files.
//!
//! Both sides of a sheet share one format, `"{1-based index}. {payload}"`,
//! one line per exercise. The grader only ever sees these files, never the
//! in-memory records, so the format is the real interface between the two
//! halves of the system.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::ExerciseRecord;

/// Write one numbered-line file: `"{index}. {payload}"` per line.
pub fn write_numbered<S: AsRef<str>>(path: &Path, payloads: &[S]) -> Result<()> {
    let mut content = String::new();
    for (i, payload) in payloads.iter().enumerate() {
        content.push_str(&format!("{}. {}\n", i + 1, payload.as_ref()));
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Write the exercise and answer files for a generated sheet.
pub fn write_sheet(
    records: &[ExerciseRecord],
    exercise_path: &Path,
    answer_path: &Path,
) -> Result<()> {
    let exercises: Vec<&str> = records.iter().map(|r| r.expression.as_str()).collect();
    let answers: Vec<&str> = records.iter().map(|r| r.answer.as_str()).collect();
    write_numbered(exercise_path, &exercises)?;
    write_numbered(answer_path, &answers)?;
    Ok(())
}

/// Read a line-oriented file into its lines, without trailing newlines.
///
/// Interior blank lines are kept so that line numbers stay aligned between
/// the exercise and answer files; they grade as wrong rather than shifting
/// every later index.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}
