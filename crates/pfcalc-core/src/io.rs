//! Decimal parsing and formatting.

use std::fmt;
use std::str::FromStr;

use crate::pfint::PfInt;

/// Failure to parse a decimal string into a [`PfInt`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a decimal integer: {input:?}")]
pub struct ParsePfIntError {
    input: String,
}

impl FromStr for PfInt {
    type Err = ParsePfIntError;

    /// Accepts optional surrounding whitespace, an optional leading `-`,
    /// and at least one decimal digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePfIntError {
                input: s.to_owned(),
            });
        }

        let mut out = PfInt::new();
        out.value.push(0);
        for b in digits.bytes() {
            out.mul10();
            out.value[0] += i32::from(b - b'0');
        }
        out.normalize();
        if negative {
            out.negate();
        }
        Ok(out)
    }
}

impl fmt::Display for PfInt {
    /// Most significant limb bare, the rest zero-padded to 9 digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.last() {
            None => f.write_str("0"),
            Some(&top) => {
                let negative = top < 0;
                if negative {
                    f.write_str("-")?;
                }
                write!(f, "{}", top.unsigned_abs())?;
                for &l in self.value.iter().rev().skip(1) {
                    write!(f, "{:09}", l.unsigned_abs())?;
                }
                Ok(())
            }
        }
    }
}
