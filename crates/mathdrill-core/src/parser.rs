//! Expression scanner.
//!
//! Turns one rendered expression line back into operands and operators. The
//! scan is a single pass over the characters with a pending numeral buffer:
//! digits, the mixed-number separator, and an embedded fraction bar grow the
//! buffer; operators, whitespace, and parentheses flush it. Parentheses are
//! decorative in this format and carry no grouping, so they are dropped
//! after the flush.

use crate::error::DrillResult;
use crate::format::MIXED_SEPARATOR;
use crate::fraction::Fraction;
use crate::model::{Expression, Op};

/// Scan a rendered expression into an [`Expression`].
///
/// A numeral that fails to parse fails the whole expression: the scanner
/// never skips an operand, so operands and operators can never silently
/// fall out of alignment. Arity is the evaluator's concern, not checked
/// here.
pub fn parse_expression(text: &str) -> DrillResult<Expression> {
    let chars: Vec<char> = text.chars().collect();
    let mut operands: Vec<Fraction> = Vec::new();
    let mut operators: Vec<Op> = Vec::new();
    let mut buffer = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() || c == MIXED_SEPARATOR {
            buffer.push(c);
        } else if c == '/' && continues_numeral(&buffer, chars.get(i + 1).copied()) {
            buffer.push(c);
        } else if let Some(op) = Op::from_char(c) {
            flush_operand(&mut buffer, &mut operands)?;
            operators.push(op);
        } else if c == '(' || c == ')' || c.is_whitespace() {
            flush_operand(&mut buffer, &mut operands)?;
        } else {
            // Unknown characters join the numeral and surface as a Format
            // error when it is flushed.
            buffer.push(c);
        }
    }
    flush_operand(&mut buffer, &mut operands)?;

    Ok(Expression {
        operands,
        operators,
    })
}

/// A `/` continues the pending numeral only while it can still be that
/// numeral's fraction bar: something is pending, no bar yet, and a digit
/// follows. Every other `/` is the division operator.
fn continues_numeral(buffer: &str, next: Option<char>) -> bool {
    !buffer.is_empty() && !buffer.contains('/') && next.is_some_and(|c| c.is_ascii_digit())
}

fn flush_operand(buffer: &mut String, operands: &mut Vec<Fraction>) -> DrillResult<()> {
    if buffer.is_empty() {
        return Ok(());
    }
    let operand: Fraction = buffer.parse()?;
    operands.push(operand);
    buffer.clear();
    Ok(())
}
