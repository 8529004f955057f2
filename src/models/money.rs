//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that sums of expenses are exact.
//! Provides arithmetic, parsing of user input, and the two text renderings used
//! by the shells (compact result figures and expense log entries).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Currency prefixes accepted (and ignored) when parsing user input
const ACCEPTED_PREFIXES: [&str; 2] = ["Rs", "$"];

/// Largest magnitude, in cents, that parsing and checked arithmetic accept
///
/// Any two amounts within this bound add or subtract without overflowing
/// an `i64`.
pub const MAX_CENTS: i64 = 100_000_000_000_000_000;

/// Represents a signed monetary amount stored as cents (hundredths of the unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// assert_eq!(Money::from_units(150).cents(), 15000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add, failing if the result leaves the supported range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).and_then(Self::bounded)
    }

    /// Subtract, failing if the result leaves the supported range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).and_then(Self::bounded)
    }

    fn bounded(cents: i64) -> Option<Self> {
        (cents.abs() <= MAX_CENTS).then_some(Self(cents))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts an optional sign, an optional `Rs` or `$` prefix and a decimal
    /// number: "10", "10.5", "-10.50", "Rs 10", ".5". Digits past the second
    /// decimal place are rounded to the nearest cent, half away from zero.
    /// Amounts beyond [`MAX_CENTS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (mut negative, rest) = split_sign(input);
        let mut rest = ACCEPTED_PREFIXES
            .iter()
            .find_map(|prefix| rest.strip_prefix(*prefix))
            .unwrap_or(rest)
            .trim_start();

        // A sign may also follow the currency prefix ("Rs-50")
        if rest.len() != input.len() {
            let (inner_negative, inner) = split_sign(rest);
            if inner.len() != rest.len() {
                if negative || input.starts_with('+') {
                    return Err(invalid());
                }
                negative = inner_negative;
                rest = inner;
            }
        }

        let (whole_str, frac_str) = match rest.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole_str.is_empty() && frac_str.is_empty())
            || !all_digits(whole_str)
            || !all_digits(frac_str)
        {
            return Err(invalid());
        }

        let whole: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| invalid())?
        };

        let digit = |idx: usize| -> i64 {
            frac_str
                .as_bytes()
                .get(idx)
                .map(|b| i64::from(b - b'0'))
                .unwrap_or(0)
        };
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .filter(|total| *total <= MAX_CENTS)
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with up to two decimals and trailing zeros dropped
    ///
    /// `600.00` renders as `600`, `50.50` as `50.5`, `0.05` as `0.05`.
    pub fn format_compact(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = self.units().abs();
        match self.cents_part() {
            0 => format!("{}{}", sign, whole),
            c if c % 10 == 0 => format!("{}{}.{}", sign, whole, c / 10),
            c => format!("{}{}.{:02}", sign, whole, c),
        }
    }

    /// Format for an expense log entry: like [`Money::format_compact`] but a
    /// whole amount keeps one decimal place (`150.0`)
    pub fn format_entry(&self) -> String {
        if self.cents_part() == 0 {
            format!("{}.0", self.format_compact())
        } else {
            self.format_compact()
        }
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else if let Some(stripped) = s.strip_prefix('+') {
        (false, stripped)
    } else {
        (false, s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("Rs"), "Rs10.50");
        assert_eq!(Money::from_cents(-5).format_with_symbol("$"), "-$0.05");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(Money::from_units(600).format_compact(), "600");
        assert_eq!(Money::from_cents(5050).format_compact(), "50.5");
        assert_eq!(Money::from_cents(5).format_compact(), "0.05");
        assert_eq!(Money::from_cents(1234).format_compact(), "12.34");
        assert_eq!(Money::from_units(-3).format_compact(), "-3");
        assert_eq!(Money::from_cents(-50).format_compact(), "-0.5");
        assert_eq!(Money::zero().format_compact(), "0");
    }

    #[test]
    fn test_format_entry() {
        assert_eq!(Money::from_units(150).format_entry(), "150.0");
        assert_eq!(Money::from_cents(1250).format_entry(), "12.5");
        assert_eq!(Money::from_cents(5).format_entry(), "0.05");
        assert_eq!(Money::from_units(-20).format_entry(), "-20.0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("  10.50 ").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("+7").unwrap().cents(), 700);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("5.").unwrap().cents(), 500);
    }

    #[test]
    fn test_parse_currency_prefix() {
        assert_eq!(Money::parse("Rs150").unwrap().cents(), 15000);
        assert_eq!(Money::parse("Rs 150").unwrap().cents(), 15000);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-$10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("Rs-50").unwrap().cents(), -5000);
        assert!(Money::parse("-Rs-50").is_err());
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("10.555").unwrap().cents(), 1056);
        assert_eq!(Money::parse("10.554").unwrap().cents(), 1055);
        assert_eq!(Money::parse("-0.125").unwrap().cents(), -13);
        assert_eq!(Money::parse("0.999").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "   ", "abc", "1e3", "NaN", "1.2.3", "12a", ".", "-", "1 000"] {
            assert!(Money::parse(input).is_err(), "expected '{}' to fail", input);
        }
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_units(10));
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(Money::parse("1000000000000000").unwrap().cents(), MAX_CENTS);
        assert_eq!(Money::parse("-1000000000000000").unwrap().cents(), -MAX_CENTS);
        assert!(Money::parse("1000000000000000.01").is_err());
        assert!(Money::parse("90000000000000000").is_err());
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::from_cents(MAX_CENTS);
        assert_eq!(
            max.checked_add(Money::from_cents(-1)),
            Some(Money::from_cents(MAX_CENTS - 1))
        );
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!((-max).checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(5).checked_sub(Money::from_cents(7)),
            Some(Money::from_cents(-2))
        );
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
