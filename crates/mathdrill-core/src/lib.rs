//! mathdrill-core — Core arithmetic engine, generator, and grader.
//!
//! This crate defines the exact-fraction arithmetic, the expression
//! parser/evaluator, and the exercise generation and grading logic that the
//! entire mathdrill system builds on.

pub mod error;
pub mod eval;
pub mod files;
pub mod format;
pub mod fraction;
pub mod generate;
pub mod grade;
pub mod model;
pub mod parser;
pub mod report;

pub use error::{DrillError, DrillResult};
pub use fraction::Fraction;
