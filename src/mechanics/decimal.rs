//! Decimal mechanics: the arbitrary-precision number every pixel amount uses.
//!
//! Values are exact decimals backed by `bigdecimal`. Every arithmetic result
//! is rounded to [`PRECISION`] significant digits, half away from zero, so
//! prices stay stable across fifty-plus orders of magnitude without drifting
//! through binary floats.
//!
//! Callers may hand in text, integers, or floats through [`IntoDecimal`]; the
//! free functions (`add`, `subtract`, `multiply`, `power`, `gte`) coerce both
//! operands first. Text is the wire form: `Display` prints plain positional
//! notation and serde (de)serializes that same string.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EconomyError, EconomyResult};

/// Significant digits kept after every operation.
pub const PRECISION: u64 = 20;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(BigDecimal);

impl Decimal {
    pub fn zero() -> Self {
        Decimal::new(0, 0)
    }

    pub fn one() -> Self {
        Decimal::new(1, 0)
    }

    /// `mantissa × 10^-scale`, exact. `Decimal::new(15, 1)` is `1.5`.
    pub fn new(mantissa: i64, scale: i64) -> Self {
        Decimal(BigDecimal::new(BigInt::from(mantissa), scale))
    }

    /// Parse decimal text exactly (no rounding until the first operation).
    pub fn parse(text: &str) -> EconomyResult<Self> {
        BigDecimal::from_str(text)
            .map(Decimal)
            .map_err(|_| EconomyError::MalformedDecimal(text.to_string()))
    }

    fn rounded(raw: BigDecimal) -> Self {
        Decimal(round_significant(raw, PRECISION))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.sign() == Sign::Plus
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// Inclusive comparison used for affordability checks.
    #[inline]
    pub fn gte(&self, other: &Decimal) -> bool {
        self >= other
    }

    /// Integer power by repeated squaring; `x^0 = 1`.
    pub fn pow(&self, exponent: u64) -> Decimal {
        let mut result = Decimal::one();
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Power with a decimal exponent. The exponent must be integral; a negative
    /// one inverts the base.
    pub fn powd(&self, exponent: &Decimal) -> EconomyResult<Decimal> {
        let n = exponent
            .to_integer()
            .ok_or_else(|| EconomyError::NonIntegralExponent(exponent.to_string()))?;
        let magnitude = n
            .magnitude()
            .to_u64()
            .ok_or_else(|| EconomyError::ExponentOutOfRange(exponent.to_string()))?;
        let raised = self.pow(magnitude);
        if n.sign() != Sign::Minus {
            return Ok(raised);
        }
        Decimal::one().checked_div(&raised)
    }

    /// `self / rhs`, rounded like every other operation.
    pub fn checked_div(&self, rhs: &Decimal) -> EconomyResult<Decimal> {
        if rhs.is_zero() {
            return Err(EconomyError::DivisionByZero);
        }
        Ok(Decimal::rounded(&self.0 / &rhs.0))
    }

    /// The exact integer value, or `None` when there is a fractional part.
    pub fn to_integer(&self) -> Option<BigInt> {
        let (int, scale) = self.0.as_bigint_and_exponent();
        if scale <= 0 {
            return Some(int * BigInt::from_biguint(Sign::Plus, pow10(scale.unsigned_abs())));
        }
        let divisor = BigInt::from_biguint(Sign::Plus, pow10(scale.unsigned_abs()));
        if (&int % &divisor).is_zero() {
            Some(int / divisor)
        } else {
            None
        }
    }

    /// `floor(log10(|self|))`, exact. `None` for zero.
    pub fn order_of_magnitude(&self) -> Option<i64> {
        if self.is_zero() {
            return None;
        }
        let (int, scale) = self.0.as_bigint_and_exponent();
        let digits = digit_count(int.magnitude()) as i64;
        Some(digits - 1 - scale)
    }

    /// Exact `self × 10^places` (moves the decimal point, no rounding).
    pub fn shift(&self, places: i64) -> Decimal {
        let (int, scale) = self.0.as_bigint_and_exponent();
        Decimal(BigDecimal::new(int, scale - places))
    }

    /// Round to `digits` significant digits, half away from zero.
    pub fn round_significant(&self, digits: u64) -> Decimal {
        Decimal(round_significant(self.0.clone(), digits.max(1)))
    }

    /// Fixed-point text with exactly `places` fractional digits, half away from zero.
    pub fn to_fixed(&self, places: u32) -> String {
        let (int, scale) = self.0.as_bigint_and_exponent();
        let places_i = i64::from(places);
        let (int, scale) = if scale > places_i {
            (shift_round(&int, (scale - places_i) as u64), places_i)
        } else {
            (int, scale)
        };
        let (negative, whole, mut frac) = split(&int, scale);
        while frac.len() < places as usize {
            frac.push('0');
        }
        let sign = if negative { "-" } else { "" };
        if places == 0 {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{frac}")
        }
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::zero()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int, scale) = self.0.as_bigint_and_exponent();
        let (negative, whole, frac) = split(&int, scale);
        let frac = frac.trim_end_matches('0');
        if negative {
            f.write_str("-")?;
        }
        if frac.is_empty() {
            f.write_str(&whole)
        } else {
            write!(f, "{whole}.{frac}")
        }
    }
}

impl FromStr for Decimal {
    type Err = EconomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(n: $t) -> Self {
                Decimal(BigDecimal::new(BigInt::from(n), 0))
            }
        }
    )*};
}
from_int!(u32, u64, i32, i64, usize);

impl TryFrom<f64> for Decimal {
    type Error = EconomyError;

    /// Goes through the float's shortest round-trip text, so `0.1` becomes
    /// exactly `0.1` rather than its binary expansion.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(EconomyError::NonFiniteFloat(value.to_string()));
        }
        Decimal::parse(&value.to_string())
    }
}

macro_rules! rounded_op {
    ($trait:ident, $method:ident) => {
        impl $trait<&Decimal> for &Decimal {
            type Output = Decimal;
            fn $method(self, rhs: &Decimal) -> Decimal {
                Decimal::rounded((&self.0).$method(&rhs.0))
            }
        }
        impl $trait<&Decimal> for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: &Decimal) -> Decimal {
                (&self).$method(rhs)
            }
        }
        impl $trait for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: Decimal) -> Decimal {
                (&self).$method(&rhs)
            }
        }
    };
}
rounded_op!(Add, add);
rounded_op!(Sub, sub);
rounded_op!(Mul, mul);

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Decimal::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Anything the adapter can coerce into a [`Decimal`].
pub trait IntoDecimal {
    fn into_decimal(self) -> EconomyResult<Decimal>;
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> EconomyResult<Decimal> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> EconomyResult<Decimal> {
        Ok(self.clone())
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> EconomyResult<Decimal> {
        Decimal::parse(self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> EconomyResult<Decimal> {
        Decimal::parse(&self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> EconomyResult<Decimal> {
        Decimal::parse(self)
    }
}

impl IntoDecimal for f64 {
    fn into_decimal(self) -> EconomyResult<Decimal> {
        Decimal::try_from(self)
    }
}

macro_rules! into_decimal_int {
    ($($t:ty),*) => {$(
        impl IntoDecimal for $t {
            fn into_decimal(self) -> EconomyResult<Decimal> {
                Ok(Decimal::from(self))
            }
        }
    )*};
}
into_decimal_int!(u32, u64, i32, i64, usize);

#[inline]
pub fn add(a: impl IntoDecimal, b: impl IntoDecimal) -> EconomyResult<Decimal> {
    Ok(a.into_decimal()? + b.into_decimal()?)
}

#[inline]
pub fn subtract(a: impl IntoDecimal, b: impl IntoDecimal) -> EconomyResult<Decimal> {
    Ok(a.into_decimal()? - b.into_decimal()?)
}

#[inline]
pub fn multiply(a: impl IntoDecimal, b: impl IntoDecimal) -> EconomyResult<Decimal> {
    Ok(a.into_decimal()? * b.into_decimal()?)
}

#[inline]
pub fn power(base: impl IntoDecimal, exponent: impl IntoDecimal) -> EconomyResult<Decimal> {
    base.into_decimal()?.powd(&exponent.into_decimal()?)
}

#[inline]
pub fn gte(a: impl IntoDecimal, b: impl IntoDecimal) -> EconomyResult<bool> {
    Ok(a.into_decimal()?.gte(&b.into_decimal()?))
}

fn pow10(places: u64) -> BigUint {
    num_traits::pow(BigUint::from(10u32), places as usize)
}

fn digit_count(magnitude: &BigUint) -> u64 {
    magnitude.to_string().len() as u64
}

fn round_significant(value: BigDecimal, digits: u64) -> BigDecimal {
    let (int, scale) = value.into_bigint_and_exponent();
    let count = digit_count(int.magnitude());
    if count <= digits {
        return BigDecimal::new(int, scale);
    }
    let dropped = count - digits;
    BigDecimal::new(shift_round(&int, dropped), scale - dropped as i64)
}

/// Drop `places` trailing digits of `int`, rounding half away from zero.
fn shift_round(int: &BigInt, places: u64) -> BigInt {
    let divisor = pow10(places);
    let magnitude = int.magnitude();
    let mut quotient = magnitude / &divisor;
    let remainder = magnitude % &divisor;
    if remainder * 2u32 >= divisor {
        quotient += 1u32;
    }
    BigInt::from_biguint(int.sign(), quotient)
}

/// (negative, whole digits, fraction digits) of `int × 10^-scale`.
fn split(int: &BigInt, scale: i64) -> (bool, String, String) {
    let negative = int.sign() == Sign::Minus;
    let digits = int.magnitude().to_string();
    if scale <= 0 {
        let mut whole = digits;
        if whole != "0" {
            whole.push_str(&"0".repeat(scale.unsigned_abs() as usize));
        }
        return (negative, whole, String::new());
    }
    let scale = scale as usize;
    if digits.len() > scale {
        let (whole, frac) = digits.split_at(digits.len() - scale);
        (negative, whole.to_string(), frac.to_string())
    } else {
        let frac = format!("{}{}", "0".repeat(scale - digits.len()), digits);
        (negative, "0".to_string(), frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn shift_round_goes_half_away_from_zero() {
        assert_eq!(shift_round(&BigInt::from(125), 1), BigInt::from(13));
        assert_eq!(shift_round(&BigInt::from(124), 1), BigInt::from(12));
        assert_eq!(shift_round(&BigInt::from(-125), 1), BigInt::from(-13));
        assert_eq!(shift_round(&BigInt::from(4), 1), BigInt::from(0));
    }

    #[test]
    fn results_keep_twenty_significant_digits() {
        let big = d("12345678901234567890");
        let sum = &big + &d("5");
        assert_eq!(sum.to_string(), "12345678901234567895");
        let rounded = &big + &d("0.5");
        assert_eq!(rounded.to_string(), "12345678901234567891");
    }

    #[test]
    fn split_handles_negative_scale_and_leading_zeros() {
        let (neg, whole, frac) = split(&BigInt::from(25), -2);
        assert!(!neg);
        assert_eq!((whole.as_str(), frac.as_str()), ("2500", ""));
        let (_, whole, frac) = split(&BigInt::from(5), 3);
        assert_eq!((whole.as_str(), frac.as_str()), ("0", "005"));
    }

    #[test]
    fn display_trims_trailing_fraction_zeros() {
        assert_eq!(d("20.000").to_string(), "20");
        assert_eq!(d("2.2500").to_string(), "2.25");
        assert_eq!(d("-0.50").to_string(), "-0.5");
        assert_eq!(d("1e3").to_string(), "1000");
    }
}
