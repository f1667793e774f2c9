//! Arithmetic engine error types.
//!
//! These error types represent failures in parsing, evaluating, generating,
//! and grading expressions. Defined in `mathdrill-core` so the grader can
//! classify per-exercise failures without string matching.

use thiserror::Error;

/// Result alias for fallible core operations.
pub type DrillResult<T> = Result<T, DrillError>;

/// Errors that can occur in the arithmetic engine.
#[derive(Debug, Clone, Error)]
pub enum DrillError {
    /// A numeral could not be parsed as an integer, fraction, or mixed number.
    #[error("cannot parse '{0}' as a number")]
    Format(String),

    /// Operand and operator counts do not line up.
    #[error("expression has {operands} operand(s) for {operators} operator(s)")]
    Arity { operands: usize, operators: usize },

    /// A zero denominator or a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Exact arithmetic exceeded the i64 range.
    #[error("arithmetic overflow")]
    Overflow,

    /// The configured operand range admits no operands.
    #[error("range limit must be at least 2, got {0}")]
    InvalidRange(i64),

    /// The generator could not produce a non-negative expression.
    #[error("no non-negative expression found within {attempts} attempts")]
    RejectionLimit { attempts: u32 },

    /// The exercise and answer files do not pair up line for line.
    #[error("input mismatch: {exercises} exercise(s) vs {answers} answer(s)")]
    LengthMismatch { exercises: usize, answers: usize },
}

impl DrillError {
    /// Returns `true` if this error only invalidates a single exercise.
    ///
    /// Item-level errors downgrade one exercise to wrong during grading and
    /// trigger regeneration during sampling; everything else is fatal to the
    /// whole batch.
    pub fn is_item_level(&self) -> bool {
        matches!(
            self,
            DrillError::Format(_)
                | DrillError::Arity { .. }
                | DrillError::DivisionByZero
                | DrillError::Overflow
        )
    }
}
