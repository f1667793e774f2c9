//! Subcommand implementations.

pub mod eval;
pub mod generate;
pub mod grade;
