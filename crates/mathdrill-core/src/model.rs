//! Core data model types for mathdrill.
//!
//! These are the fundamental types the generator, parser, evaluator, and
//! grader all share: the operator alphabet, a parsed expression, and one
//! generated exercise.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DrillResult;
use crate::fraction::Fraction;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Every operator, in the order the generator draws from.
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Map an operator character to its `Op`, if it is one.
    pub const fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub const fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Apply the operator to two exact values.
    pub fn apply(&self, lhs: Fraction, rhs: Fraction) -> DrillResult<Fraction> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => lhs.checked_div(rhs),
        }
    }

    /// Whether a rendered operand directly after this operator gets
    /// decorative parentheses.
    pub const fn parenthesizes_operand(&self) -> bool {
        matches!(self, Op::Sub | Op::Div)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed expression: operands in text order and the operators between
/// them. Evaluation is strictly left to right, so the two vecs are the whole
/// structure; there is no tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    pub operands: Vec<Fraction>,
    pub operators: Vec<Op>,
}

/// One generated problem: the rendered expression and its answer text.
///
/// Records are immutable once generated; the grader never sees them, it
/// reconstructs everything from the written files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// 1-based position in the sheet.
    pub index: usize,
    /// Rendered expression, e.g. `"1/2 + 3’1/2 - (2/3)"`.
    pub expression: String,
    /// Rendered exact result, e.g. `"3’1/3"`.
    pub answer: String,
}
