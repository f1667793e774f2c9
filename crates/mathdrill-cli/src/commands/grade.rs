//! The `mathdrill grade` command.

use std::path::PathBuf;

use anyhow::Result;

use mathdrill_core::files;
use mathdrill_core::grade::grade;
use mathdrill_core::report::GradeReport;

pub fn execute(
    exercise_path: PathBuf,
    answer_path: PathBuf,
    out_path: PathBuf,
    json_path: Option<PathBuf>,
) -> Result<()> {
    let exercises = files::read_lines(&exercise_path)?;
    let answers = files::read_lines(&answer_path)?;

    let report = grade(&exercises, &answers)?;

    report.save_text(&out_path)?;
    if let Some(path) = &json_path {
        report.save_json(path)?;
    }

    print_summary(&report);
    println!("Grades written to: {}", out_path.display());
    if let Some(path) = &json_path {
        println!("JSON report: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &GradeReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Total", "Correct", "Wrong", "Accuracy"]);
    table.add_row(vec![
        Cell::new(report.total),
        Cell::new(report.correct.len()),
        Cell::new(report.wrong.len()),
        Cell::new(format!("{:.1}%", report.accuracy() * 100.0)),
    ]);

    eprintln!("{table}");
}
