//! Randomized exercise generation.
//!
//! Candidates are drawn from a seedable RNG and rejection-sampled until the
//! evaluated result is non-negative, so every published exercise has an
//! answer a student can actually reach. The retry budget is bounded; a
//! constraint the distributions cannot satisfy surfaces as an error instead
//! of a spin.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{DrillError, DrillResult};
use crate::eval::evaluate;
use crate::fraction::Fraction;
use crate::model::{ExerciseRecord, Expression, Op};

/// Candidate budget per exercise before the generator gives up.
pub const MAX_ATTEMPTS: u32 = 1000;

/// Operator counts are drawn uniformly from this inclusive range.
const MIN_OPERATORS: usize = 1;
const MAX_OPERATORS: usize = 3;

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of exercises to generate.
    pub count: usize,
    /// Naturals and numerators are drawn from `[1, range_limit - 1]`,
    /// denominators from `[2, range_limit]`. Must be at least 2.
    pub range_limit: i64,
    /// Fixed RNG seed for reproducible sheets; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Candidate budget per exercise.
    pub max_attempts: u32,
}

impl GeneratorConfig {
    pub fn new(count: usize, range_limit: i64) -> Self {
        Self {
            count,
            range_limit,
            seed: None,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generate a full sheet of exercises.
///
/// The operator count of each problem is drawn uniformly from 1..=3. With a
/// fixed seed the produced sheet is byte-for-byte reproducible.
pub fn generate_exercises(config: &GeneratorConfig) -> DrillResult<Vec<ExerciseRecord>> {
    if config.range_limit < 2 {
        return Err(DrillError::InvalidRange(config.range_limit));
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut records = Vec::with_capacity(config.count);
    for index in 1..=config.count {
        let operator_count = rng.gen_range(MIN_OPERATORS..=MAX_OPERATORS);
        let (expression, answer) = generate_expression(&mut rng, config, operator_count)?;
        tracing::trace!("generated exercise {index}: {expression} = {answer}");
        records.push(ExerciseRecord {
            index,
            expression,
            answer,
        });
    }
    Ok(records)
}

/// Generate one exercise with exactly `operator_count` operators.
///
/// Returns the rendered expression and answer texts. A `range_limit` below
/// 2 admits no operands and fails with [`DrillError::InvalidRange`] before
/// any sampling. A candidate whose result is negative, or whose evaluation
/// fails (overflow at large range limits), is rejected and redrawn; after
/// `max_attempts` rejections the whole run fails with
/// [`DrillError::RejectionLimit`].
pub fn generate_expression(
    rng: &mut impl Rng,
    config: &GeneratorConfig,
    operator_count: usize,
) -> DrillResult<(String, String)> {
    if config.range_limit < 2 {
        return Err(DrillError::InvalidRange(config.range_limit));
    }

    for _ in 0..config.max_attempts {
        let expr = random_expression(rng, config.range_limit, operator_count)?;
        match evaluate(&expr) {
            Ok(result) if !result.is_negative() => {
                return Ok((render(&expr), result.to_string()));
            }
            // Negative result or failed arithmetic: draw a fresh candidate.
            Ok(_) | Err(_) => {}
        }
    }
    Err(DrillError::RejectionLimit {
        attempts: config.max_attempts,
    })
}

fn random_expression(
    rng: &mut impl Rng,
    range_limit: i64,
    operator_count: usize,
) -> DrillResult<Expression> {
    let mut operands = Vec::with_capacity(operator_count + 1);
    let mut operators = Vec::with_capacity(operator_count);

    operands.push(random_operand(rng, range_limit)?);
    for _ in 0..operator_count {
        operators.push(Op::ALL[rng.gen_range(0..Op::ALL.len())]);
        operands.push(random_operand(rng, range_limit)?);
    }

    Ok(Expression {
        operands,
        operators,
    })
}

/// Draw one operand: a natural or a fraction, with equal probability.
///
/// Operands are always strictly positive, so a division inside a candidate
/// can never hit a zero divisor; the fraction may still reduce to a whole
/// number or exceed 1.
fn random_operand(rng: &mut impl Rng, range_limit: i64) -> DrillResult<Fraction> {
    if rng.gen_bool(0.5) {
        Ok(Fraction::from_integer(rng.gen_range(1..range_limit)))
    } else {
        let numer = rng.gen_range(1..range_limit);
        let denom = rng.gen_range(2..=range_limit);
        Fraction::new(numer, denom)
    }
}

/// Render an expression the way it appears on the sheet: operands joined
/// with single-spaced operators, and the operand after a `-` or `/` wrapped
/// in decorative parentheses.
fn render(expr: &Expression) -> String {
    let Some(first) = expr.operands.first() else {
        return String::new();
    };
    let mut out = first.to_string();
    for (op, operand) in expr.operators.iter().zip(&expr.operands[1..]) {
        if op.parenthesizes_operand() {
            out.push_str(&format!(" {op} ({operand})"));
        } else {
            out.push_str(&format!(" {op} {operand}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expression;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn render_wraps_operands_after_sub_and_div() {
        let expr = Expression {
            operands: vec![Fraction::from_integer(5), frac(1, 3), Fraction::from_integer(2)],
            operators: vec![Op::Sub, Op::Mul],
        };
        assert_eq!(render(&expr), "5 - (1/3) * 2");

        let expr = Expression {
            operands: vec![Fraction::from_integer(4), frac(5, 2)],
            operators: vec![Op::Div],
        };
        assert_eq!(render(&expr), "4 / (2’1/2)");
    }

    #[test]
    fn fixed_seed_reproduces_the_sheet() {
        let config = GeneratorConfig::new(12, 10).with_seed(42);
        let first = generate_exercises(&config).unwrap();
        let second = generate_exercises(&config).unwrap();
        assert_eq!(first.len(), 12);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.expression, b.expression);
            assert_eq!(a.answer, b.answer);
        }
    }

    #[test]
    fn generated_sheets_reparse_and_recompute() {
        let config = GeneratorConfig::new(50, 12).with_seed(7);
        for record in generate_exercises(&config).unwrap() {
            let expr = parse_expression(&record.expression)
                .unwrap_or_else(|e| panic!("cannot reparse {:?}: {e}", record.expression));

            assert!((MIN_OPERATORS..=MAX_OPERATORS).contains(&expr.operators.len()));
            assert_eq!(expr.operands.len(), expr.operators.len() + 1);
            for operand in &expr.operands {
                assert!(operand.numer() >= 1, "operand {operand} in {}", record.expression);
                assert!(operand.numer() <= 11);
                assert!(operand.denom() <= 12);
            }

            let result = evaluate(&expr).unwrap();
            assert!(!result.is_negative(), "negative answer in {}", record.expression);
            assert_eq!(result, record.answer.parse().unwrap());
        }
    }

    #[test]
    fn indices_are_one_based_and_dense() {
        let config = GeneratorConfig::new(5, 6).with_seed(9);
        let records = generate_exercises(&config).unwrap();
        let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn range_limit_below_two_is_rejected() {
        let config = GeneratorConfig::new(1, 1);
        assert!(matches!(
            generate_exercises(&config),
            Err(DrillError::InvalidRange(1))
        ));
    }

    #[test]
    fn single_expression_rejects_range_below_two() {
        // The single-expression entry must error too, not panic in the
        // operand sampler.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = GeneratorConfig::new(1, 1);
        assert!(matches!(
            generate_expression(&mut rng, &config, 2),
            Err(DrillError::InvalidRange(1))
        ));
    }

    #[test]
    fn exhausted_candidate_budget_is_an_error() {
        let mut config = GeneratorConfig::new(1, 5).with_seed(1);
        config.max_attempts = 0;
        assert!(matches!(
            generate_exercises(&config),
            Err(DrillError::RejectionLimit { attempts: 0 })
        ));
    }

    #[test]
    fn smallest_range_still_generates() {
        let config = GeneratorConfig::new(20, 2).with_seed(3);
        let records = generate_exercises(&config).unwrap();
        assert_eq!(records.len(), 20);
        // With range 2 the only operands are 1 and 1/2.
        for record in &records {
            let expr = parse_expression(&record.expression).unwrap();
            for operand in &expr.operands {
                assert!(*operand == Fraction::from_integer(1) || *operand == frac(1, 2));
            }
        }
    }
}
