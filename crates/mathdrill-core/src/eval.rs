//! Left-to-right expression evaluation.

use crate::error::{DrillError, DrillResult};
use crate::fraction::Fraction;
use crate::model::Expression;
use crate::parser::parse_expression;

/// Evaluate an expression by folding strictly left to right.
///
/// `2 + 3 * 4` is 20, not 14: the text order of operators is authoritative
/// and there is no precedence. Requires exactly one more operand than
/// operators, otherwise fails with [`DrillError::Arity`]. The result passes
/// through a final canonical reduction.
pub fn evaluate(expr: &Expression) -> DrillResult<Fraction> {
    if expr.operands.len() != expr.operators.len() + 1 {
        return Err(DrillError::Arity {
            operands: expr.operands.len(),
            operators: expr.operators.len(),
        });
    }

    let mut result = expr.operands[0];
    for (op, operand) in expr.operators.iter().zip(&expr.operands[1..]) {
        result = op.apply(result, *operand)?;
    }
    Ok(result.simplified())
}

/// Scan and evaluate a rendered expression line in one step.
pub fn evaluate_str(text: &str) -> DrillResult<Fraction> {
    evaluate(&parse_expression(text)?)
}
