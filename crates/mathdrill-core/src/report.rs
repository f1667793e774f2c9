//! Grade report with text and JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of one grading run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Number of graded exercises.
    pub total: usize,
    /// 1-based indices answered correctly, ascending.
    pub correct: Vec<usize>,
    /// 1-based indices answered wrong, ascending.
    pub wrong: Vec<usize>,
}

impl GradeReport {
    pub fn new(correct: Vec<usize>, wrong: Vec<usize>) -> Self {
        Self {
            created_at: Utc::now(),
            total: correct.len() + wrong.len(),
            correct,
            wrong,
        }
    }

    /// Share of exercises answered correctly; 0.0 when nothing was graded.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct.len() as f64 / self.total as f64
        }
    }

    /// Render the two-line text report:
    ///
    /// ```text
    /// Correct: 3 (1, 3, 5)
    /// Wrong: 2 (2, 4)
    /// ```
    pub fn to_text(&self) -> String {
        format!(
            "Correct: {} ({})\nWrong: {} ({})\n",
            self.correct.len(),
            join_indices(&self.correct),
            self.wrong.len(),
            join_indices(&self.wrong),
        )
    }

    /// Write the text report to a file.
    pub fn save_text(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_text())
            .with_context(|| format!("failed to write grade report to {}", path.display()))
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("failed to serialize grade report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write grade report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read grade report from {}", path.display()))?;
        let report: GradeReport =
            serde_json::from_str(&content).context("failed to parse grade report JSON")?;
        Ok(report)
    }
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_format() {
        let report = GradeReport::new(vec![1, 3, 5], vec![2, 4]);
        assert_eq!(report.to_text(), "Correct: 3 (1, 3, 5)\nWrong: 2 (2, 4)\n");
    }

    #[test]
    fn text_report_with_empty_sides() {
        let report = GradeReport::new(vec![1, 2], vec![]);
        assert_eq!(report.to_text(), "Correct: 2 (1, 2)\nWrong: 0 ()\n");

        let report = GradeReport::new(vec![], vec![]);
        assert_eq!(report.to_text(), "Correct: 0 ()\nWrong: 0 ()\n");
    }

    #[test]
    fn accuracy_handles_empty_and_full() {
        assert_eq!(GradeReport::new(vec![], vec![]).accuracy(), 0.0);
        assert_eq!(GradeReport::new(vec![1, 2], vec![]).accuracy(), 1.0);
        assert_eq!(GradeReport::new(vec![1], vec![2]).accuracy(), 0.5);
    }

    #[test]
    fn json_roundtrip() {
        let report = GradeReport::new(vec![1, 2], vec![3]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("grade.json");

        report.save_json(&path).unwrap();
        let loaded = GradeReport::load_json(&path).unwrap();

        assert_eq!(loaded.total, 3);
        assert_eq!(loaded.correct, vec![1, 2]);
        assert_eq!(loaded.wrong, vec![3]);
        assert_eq!(loaded.created_at, report.created_at);
    }

    #[test]
    fn save_text_writes_the_rendered_report() {
        let report = GradeReport::new(vec![1], vec![2]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Grade.txt");

        report.save_text(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Correct: 1 (1)\nWrong: 1 (2)\n");
    }
}
