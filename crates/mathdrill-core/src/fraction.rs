//! Exact rational arithmetic.
//!
//! `Fraction` is the single numeric type of the whole system: every operand,
//! every intermediate value, and every answer is one of these. No floating
//! point anywhere; all arithmetic is checked i64.

use crate::error::{DrillError, DrillResult};

/// An exact fraction in lowest terms.
///
/// Invariants: the denominator is strictly positive, the sign lives on the
/// numerator, and `gcd(|numer|, denom) == 1`. Every constructor and every
/// arithmetic operation re-establishes these, so two equal values are always
/// structurally equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    /// The zero value, `0/1`.
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };

    /// Build a reduced fraction from a numerator and denominator.
    ///
    /// Fails with [`DrillError::DivisionByZero`] when `denom == 0`. A
    /// negative denominator is normalized by moving the sign to the
    /// numerator.
    pub fn new(numer: i64, denom: i64) -> DrillResult<Self> {
        if denom == 0 {
            return Err(DrillError::DivisionByZero);
        }
        let (numer, denom) = if denom < 0 {
            (
                numer.checked_neg().ok_or(DrillError::Overflow)?,
                denom.checked_neg().ok_or(DrillError::Overflow)?,
            )
        } else {
            (numer, denom)
        };
        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i64;
        Ok(Self {
            numer: numer / g,
            denom: denom / g,
        })
    }

    /// Build a whole number as a fraction over 1.
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// The reduced numerator (carries the sign).
    pub const fn numer(&self) -> i64 {
        self.numer
    }

    /// The reduced denominator (always positive).
    pub const fn denom(&self) -> i64 {
        self.denom
    }

    pub const fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.numer < 0
    }

    /// Exact sum.
    pub fn checked_add(self, rhs: Self) -> DrillResult<Self> {
        let left = self.numer.checked_mul(rhs.denom);
        let right = rhs.numer.checked_mul(self.denom);
        let numer = match (left, right) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        }
        .ok_or(DrillError::Overflow)?;
        let denom = self
            .denom
            .checked_mul(rhs.denom)
            .ok_or(DrillError::Overflow)?;
        Self::new(numer, denom)
    }

    /// Exact difference.
    pub fn checked_sub(self, rhs: Self) -> DrillResult<Self> {
        let left = self.numer.checked_mul(rhs.denom);
        let right = rhs.numer.checked_mul(self.denom);
        let numer = match (left, right) {
            (Some(a), Some(b)) => a.checked_sub(b),
            _ => None,
        }
        .ok_or(DrillError::Overflow)?;
        let denom = self
            .denom
            .checked_mul(rhs.denom)
            .ok_or(DrillError::Overflow)?;
        Self::new(numer, denom)
    }

    /// Exact product.
    pub fn checked_mul(self, rhs: Self) -> DrillResult<Self> {
        let numer = self
            .numer
            .checked_mul(rhs.numer)
            .ok_or(DrillError::Overflow)?;
        let denom = self
            .denom
            .checked_mul(rhs.denom)
            .ok_or(DrillError::Overflow)?;
        Self::new(numer, denom)
    }

    /// Exact quotient.
    ///
    /// Fails with [`DrillError::DivisionByZero`] when the divisor is zero.
    pub fn checked_div(self, rhs: Self) -> DrillResult<Self> {
        if rhs.is_zero() {
            return Err(DrillError::DivisionByZero);
        }
        let numer = self
            .numer
            .checked_mul(rhs.denom)
            .ok_or(DrillError::Overflow)?;
        let denom = self
            .denom
            .checked_mul(rhs.numer)
            .ok_or(DrillError::Overflow)?;
        Self::new(numer, denom)
    }

    /// Canonical-form pass applied after a chain of operations.
    ///
    /// Construction already reduces, so on well-formed values this is the
    /// identity; it exists so a fold can assert lowest terms on its result
    /// without tracking how the value was produced. Exactness is preserved.
    pub fn simplified(self) -> Self {
        let g = gcd(self.numer.unsigned_abs(), self.denom.unsigned_abs()) as i64;
        Self {
            numer: self.numer / g,
            denom: self.denom / g,
        }
    }
}

/// Euclidean gcd. Never returns 0 because the denominator is never 0.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
