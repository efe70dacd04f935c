//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (paise, cents) as `i64` so sums of
//! recorded amounts are exact. The annuity formulas work in floating point and
//! convert at the edges with [`Money::to_f64`] and [`Money::from_f64`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbol used by `Display`
pub const DEFAULT_SYMBOL: &str = "₹";

/// Represents a monetary amount stored as minor units (hundredths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from input: one trillion currency units
    pub const MAX: Money = Money(100_000_000_000_000);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use financehub::models::Money;
    /// let amount = Money::from_minor(1050); // ₹10.50
    /// assert_eq!(amount.to_string(), "₹10.50");
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units and minor units
    ///
    /// # Examples
    /// ```
    /// use financehub::models::Money;
    /// let amount = Money::from_major_minor(10, 50);
    /// assert_eq!(amount.minor(), 1050);
    /// ```
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    /// Create a Money amount from whole units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Convert a floating-point currency amount, rounding to the nearest
    /// minor unit (half away from zero)
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in currency units as a float
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "$10.50", "1,500", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s
            .strip_prefix('₹')
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s)
            .replace(',', "");

        if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
            return Err(MoneyParseError::InvalidFormat(s));
        }

        let minor = if let Some((whole, fraction)) = s.split_once('.') {
            let major: i64 = if whole.is_empty() {
                0
            } else {
                whole
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?
            };

            if !fraction.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.clone()));
            }

            let minor: i64 = match fraction.len() {
                0 => 0,
                1 => fraction.parse::<i64>().unwrap_or(0) * 10,
                2 => fraction.parse().unwrap_or(0),
                _ => return Err(MoneyParseError::TooPrecise(s.clone())),
            };

            major
                .checked_mul(100)
                .and_then(|m| m.checked_add(minor))
                .ok_or_else(|| MoneyParseError::OutOfRange(s.clone()))?
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(s.clone()))?
        };

        if minor > Self::MAX.0 {
            return Err(MoneyParseError::OutOfRange(s));
        }

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Addition that reports overflow instead of saturating
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.minor_part())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.minor_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("Money amount out of range: {0}")]
    OutOfRange(String),
    #[error("Money amount has more than two decimal places: {0}")]
    TooPrecise(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1050).to_string(), "₹10.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
        assert_eq!(Money::from_minor(-1050).to_string(), "-₹10.50");
        assert_eq!(Money::from_minor(5).to_string(), "₹0.05");
        assert_eq!(Money::from_minor(1050).format_with_symbol("$"), "$10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse("10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().minor(), 5);
        assert_eq!(Money::parse("-0.50").unwrap().minor(), -50);
        assert_eq!(Money::parse("1,00,000").unwrap().minor(), 10_000_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_decimals() {
        assert_eq!(
            Money::parse("10.999"),
            Err(MoneyParseError::TooPrecise("10.999".into()))
        );
        assert!(Money::parse("0.001").is_err());
        assert_eq!(Money::parse("10.99").unwrap().minor(), 1099);
    }

    #[test]
    fn test_parse_rejects_amounts_above_max() {
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse("-1000000000001").is_err());
        assert_eq!(Money::parse("1000000000000").unwrap(), Money::MAX);
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let big = Money::from_minor(i64::MAX - 10);
        assert_eq!((big + Money::from_minor(100)).minor(), i64::MAX);
        assert_eq!(big.checked_add(Money::from_minor(100)), None);
        assert_eq!(
            Money::MAX.checked_add(Money::MAX),
            Some(Money::from_minor(200_000_000_000_000))
        );

        let total: Money = vec![big, big].into_iter().sum();
        assert_eq!(total.minor(), i64::MAX);
    }

    #[test]
    fn test_f64_conversion() {
        assert_eq!(Money::from_f64(8791.588723).minor(), 879159);
        assert_eq!(Money::from_f64(-0.005).minor(), -1);
        assert!((Money::from_minor(12345).to_f64() - 123.45).abs() < 1e-9);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_minor(100),
            Money::from_minor(200),
            Money::from_minor(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.minor(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
