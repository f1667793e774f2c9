//! Mixed-number text format.
//!
//! Renders and parses the textual form shared by exercise sheets and answer
//! keys: bare integers (`"4"`), simple fractions (`"2/3"`), and mixed
//! numbers (`"3’1/2"`). `Display` and `FromStr` are exact inverses for every
//! non-negative [`Fraction`], which is what makes independent re-grading of
//! a generated sheet possible.

use std::fmt;
use std::str::FromStr;

use crate::error::{DrillError, DrillResult};
use crate::fraction::Fraction;

/// Separator between the whole part and the fractional part of a mixed
/// number. U+2019, deliberately not an ASCII space or slash so the scanner
/// can treat it as part of a numeral.
pub const MIXED_SEPARATOR: char = '’';

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        let n = self.numer().unsigned_abs();
        let d = self.denom() as u64;
        if d == 1 {
            write!(f, "{n}")
        } else if n < d {
            write!(f, "{n}/{d}")
        } else {
            write!(f, "{whole}{MIXED_SEPARATOR}{rem}/{d}", whole = n / d, rem = n % d)
        }
    }
}

impl FromStr for Fraction {
    type Err = DrillError;

    /// Parse a bare integer, `"num/denom"`, or `"whole’num/denom"`.
    ///
    /// Components may carry surrounding whitespace but must otherwise be
    /// ASCII digits only, so a sign, a letter, or a space inside a digit run
    /// rejects the whole numeral.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DrillError::Format(s.to_string()));
        }

        let (whole, rest) = match trimmed.split_once(MIXED_SEPARATOR) {
            Some((w, rest)) => (Some(parse_component(w, s)?), rest),
            None => (None, trimmed),
        };

        let (numer, denom) = match rest.split_once('/') {
            Some((n, d)) => (parse_component(n, s)?, parse_component(d, s)?),
            // A separator with no fraction after it is not a mixed number.
            None if whole.is_some() => return Err(DrillError::Format(s.to_string())),
            None => (parse_component(rest, s)?, 1),
        };

        match whole {
            None => Fraction::new(numer, denom),
            Some(w) => {
                let scaled = w
                    .checked_mul(denom)
                    .and_then(|v| v.checked_add(numer))
                    .ok_or(DrillError::Overflow)?;
                Fraction::new(scaled, denom)
            }
        }
    }
}

/// Parse one whitespace-padded, digits-only component of a numeral.
///
/// The error carries the full original numeral, not the component, so the
/// grading log shows the text exactly as it appeared in the file.
fn parse_component(text: &str, original: &str) -> DrillResult<i64> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DrillError::Format(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| DrillError::Format(original.to_string()))
}
