//! Batch grading.
//!
//! The grader trusts nothing from generation time: it reparses every
//! exercise line, recomputes the result, reparses the recorded answer, and
//! compares exactly. One bad line never takes down the batch; it marks that
//! index wrong and the loop moves on.

use crate::error::{DrillError, DrillResult};
use crate::eval::evaluate_str;
use crate::fraction::Fraction;
use crate::report::GradeReport;

/// Grade answer lines against exercise lines, pairing them 1-based.
///
/// The two inputs must have the same length; a mismatch fails with
/// [`DrillError::LengthMismatch`] before any grading happens. Per-item
/// failures (missing `". "` delimiter, malformed numeral, zero divisor,
/// overflow) downgrade that index to wrong.
pub fn grade<S: AsRef<str>>(
    exercise_lines: &[S],
    answer_lines: &[S],
) -> DrillResult<GradeReport> {
    if exercise_lines.len() != answer_lines.len() {
        return Err(DrillError::LengthMismatch {
            exercises: exercise_lines.len(),
            answers: answer_lines.len(),
        });
    }

    let mut correct = Vec::new();
    let mut wrong = Vec::new();

    for (i, (exercise_line, answer_line)) in
        exercise_lines.iter().zip(answer_lines).enumerate()
    {
        let index = i + 1;
        match grade_lines(exercise_line.as_ref(), answer_line.as_ref()) {
            Ok(true) => correct.push(index),
            Ok(false) => wrong.push(index),
            Err(e) if e.is_item_level() => {
                tracing::debug!("exercise {index} marked wrong: {e}");
                wrong.push(index);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(GradeReport::new(correct, wrong))
}

/// Recompute one exercise and compare it with one recorded answer.
///
/// Takes the bare payloads, without the `"{index}. "` prefixes. Equality is
/// exact equality of reduced fractions, so `"8/2"` matches a computed `4`.
pub fn check_pair(exercise: &str, answer: &str) -> DrillResult<bool> {
    let computed = evaluate_str(exercise)?;
    let recorded: Fraction = answer.parse()?;
    Ok(computed == recorded)
}

fn grade_lines(exercise_line: &str, answer_line: &str) -> DrillResult<bool> {
    let exercise = payload(exercise_line)?;
    let answer = payload(answer_line)?;
    check_pair(exercise, answer)
}

/// The text after the first `". "` of a numbered line.
fn payload(line: &str) -> DrillResult<&str> {
    line.split_once(". ")
        .map(|(_, rest)| rest)
        .ok_or_else(|| DrillError::Format(line.to_string()))
}
