//! Fixed-point currency amounts.
//!
//! Amounts are stored as whole cents so totals and averages stay exact at two
//! decimal places. Text input is parsed as a float and rounded to the nearest
//! cent, matching how donations are typed at the prompt.

use std::fmt;
use std::ops::Add;

use anyhow::{Result, anyhow};

/// Largest magnitude accepted from input, in cents (about 90 trillion dollars).
const MAX_CENTS: f64 = 9_000_000_000_000_000.0;

/// A currency amount in whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Round a float dollar value to the nearest cent (ties to even).
    pub fn from_f64(dollars: f64) -> Result<Self> {
        if !dollars.is_finite() {
            return Err(anyhow!("amount must be a finite number"));
        }
        let cents = (dollars * 100.0).round_ties_even();
        if cents.abs() > MAX_CENTS {
            return Err(anyhow!("amount {dollars} is out of range"));
        }
        Ok(Self(cents as i64))
    }

    /// Parse free text such as `50`, `12.5` or ` -3.999 `.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let dollars: f64 = trimmed
            .parse()
            .map_err(|_| anyhow!("invalid amount '{trimmed}'"))?;
        Self::from_f64(dollars)
    }

    /// Divide by `count`, rounding half-to-even at the cent.
    ///
    /// Returns `None` when `count` is zero.
    pub fn div_round(self, count: u32) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let divisor = i64::from(count);
        let quotient = self.0.div_euclid(divisor);
        let remainder = self.0.rem_euclid(divisor);
        let rounded = match (remainder * 2).cmp(&divisor) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal => quotient + (quotient & 1),
        };
        Some(Self(rounded))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Amount {
    /// Two decimals, no currency symbol, no grouping: `1012.40`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let rendered = format!("{sign}{}.{:02}", abs / 100, abs % 100);
        f.pad(&rendered)
    }
}
