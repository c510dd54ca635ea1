//! Bounded-precision decimal numbers using dashu
//!
//! Uses dashu-float (DBig) so magnitudes and conversion coefficients stay in
//! base 10. Conversions between decimal and binary prefixes terminate in
//! base 10, which keeps them exact; the only rounding happens on division by
//! a factor of 60 or 24, and at the final `to_f64` boundary.

use std::num::NonZeroU32;
use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),
}

/// Working precision for calculations (decimal digits)
const DEFAULT_PRECISION: usize = 50;

/// Bounded-precision decimal number
///
/// Built on dashu-float's DBig. All operations return Results or new
/// Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    /// Ensure a DBig has adequate precision for calculations
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    /// Create from a plain decimal literal
    /// Supports: "123", "3.14", "-42", "+1.25", ".5", "5."
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let trimmed = s.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

        // dashu wants digits on both sides of the point
        let mut literal = String::with_capacity(unsigned.len() + 2);
        let (sign, body) = match unsigned.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", unsigned),
        };
        literal.push_str(sign);
        if body.starts_with('.') {
            literal.push('0');
        }
        literal.push_str(body);
        if body.ends_with('.') {
            literal.push('0');
        }

        let inner: DBig = literal
            .parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Division; the divisor type rules out zero
    pub fn div_nonzero(&self, divisor: &NonZeroNumber) -> Self {
        Self { inner: &self.inner / &divisor.0.inner }
    }

    /// Non-negative integer power (exact)
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::from_i64(1);
        for _ in 0..exp {
            result = result.mul(self);
        }
        result
    }

    /// Floor - largest integer <= x
    pub fn floor(&self) -> Self {
        Self { inner: self.inner.clone().floor() }
    }

    // ========== Conversion ==========

    /// Render as a plain decimal literal, never in exponent form
    ///
    /// The output always matches `^-?[0-9]+(\.[0-9]+)?$`, so it can be fed
    /// back through [`Number::from_str`] without loss.
    pub fn to_plain_string(&self) -> String {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let negative = significand < IBig::ZERO;
        let digits = if negative {
            (-significand).to_string()
        } else {
            significand.to_string()
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }

        if exponent >= 0 {
            out.push_str(&digits);
            if digits != "0" {
                out.extend(std::iter::repeat('0').take(exponent as usize));
            }
            return out;
        }

        let scale = exponent.unsigned_abs();
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            out.push_str(int_part);
            out.push('.');
            out.push_str(frac_part);
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(scale - digits.len()));
            out.push_str(&digits);
        }

        // Trailing zeros after the point carry no information
        if out.contains('.') {
            let kept = out.trim_end_matches('0').trim_end_matches('.').len();
            out.truncate(kept);
        }
        out
    }

    /// Convert to f64, correctly rounded
    ///
    /// Goes through the decimal literal so the only rounding is the one
    /// performed by the float parser.
    pub fn to_f64(&self) -> f64 {
        self.to_plain_string().parse().unwrap_or(f64::NAN)
    }
}

/// A `Number` that is never zero
///
/// Built only from non-zero integers and closed under multiplication and
/// powers, so it can always serve as a divisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonZeroNumber(Number);

impl NonZeroNumber {
    pub fn one() -> Self {
        NonZeroNumber(Number::from_i64(1))
    }

    pub fn get(&self) -> &Number {
        &self.0
    }

    pub fn is_one(&self) -> bool {
        self.0 == Number::from_i64(1)
    }

    pub fn mul(&self, other: &Self) -> Self {
        NonZeroNumber(self.0.mul(&other.0))
    }

    pub fn pow(&self, exp: u32) -> Self {
        NonZeroNumber(self.0.pow(exp))
    }
}

impl From<NonZeroU32> for NonZeroNumber {
    fn from(n: NonZeroU32) -> Self {
        NonZeroNumber(Number::from_i64(i64::from(n.get())))
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // DBig implements PartialOrd, use it and treat None as Equal
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nonzero(n: u32) -> NonZeroNumber {
        NonZeroNumber::from(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn test_from_str_accepts_loose_points() {
        assert_eq!(Number::from_str(".5").unwrap(), Number::from_str("0.5").unwrap());
        assert_eq!(Number::from_str("5.").unwrap(), Number::from_i64(5));
        assert_eq!(Number::from_str("+1.25").unwrap(), Number::from_str("1.25").unwrap());
        assert_eq!(Number::from_str("-.5").unwrap(), Number::from_str("-0.5").unwrap());
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(Number::from_str("1.2.3").is_err());
        assert!(Number::from_str("two").is_err());
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Number::from_i64(760).to_plain_string(), "760");
        assert_eq!(Number::from_i64(0).to_plain_string(), "0");
        assert_eq!(Number::from_str("1.50").unwrap().to_plain_string(), "1.5");
        assert_eq!(Number::from_str("-0.0025").unwrap().to_plain_string(), "-0.0025");
        assert_eq!(Number::from_i64(3).pow(30).to_plain_string(), "205891132094649");
        assert_eq!(Number::from_i64(1000).pow(4).to_plain_string(), "1000000000000");
    }

    #[test]
    fn test_plain_string_round_trips() {
        let third = Number::from_i64(1).div_nonzero(&nonzero(3));
        let text = third.to_plain_string();
        assert!(text.starts_with("0.3333"));
        assert_eq!(Number::from_str(&text).unwrap(), third);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Number::from_str("2.048").unwrap().to_f64(), 2.048);
        let ratio = Number::from_i64(2000).div_nonzero(&nonzero(1024));
        assert_eq!(ratio.to_f64(), 1.953125);
    }

    #[test]
    fn test_exact_division_by_powers_of_ten_and_two() {
        let tebi = nonzero(1024).pow(4);
        let tera = Number::from_i64(1000).pow(4);
        let q = Number::from_i64(2).mul(&tera).div_nonzero(&tebi);
        assert_eq!(q.mul(tebi.get()), Number::from_i64(2).mul(&tera));
    }

    #[test]
    fn test_nonzero_divisor() {
        let day = nonzero(24).mul(&nonzero(60)).mul(&nonzero(60));
        assert_eq!(day.get(), &Number::from_i64(86400));
        assert!(NonZeroNumber::one().is_one());
        assert!(!day.is_one());
        assert_eq!(Number::from_i64(43200).div_nonzero(&day).to_plain_string(), "0.5");
    }

    #[test]
    fn test_sub() {
        assert_eq!(Number::from_i64(66).sub(&Number::from_i64(60)), Number::from_i64(6));
        assert_eq!(Number::from_i64(0).sub(&Number::from_str("0.5").unwrap()).to_plain_string(), "-0.5");
    }

    #[test]
    fn test_pow_zero() {
        assert_eq!(Number::from_i64(24).pow(0), Number::from_i64(1));
    }

    #[test]
    fn test_floor() {
        assert_eq!(Number::from_str("4.9").unwrap().floor(), Number::from_i64(4));
        assert_eq!(Number::from_str("-0.5").unwrap().floor(), Number::from_i64(-1));
        assert_eq!(Number::from_i64(7).floor(), Number::from_i64(7));
    }

    #[test]
    fn test_ordering() {
        assert!(Number::from_i64(-1) < Number::from_i64(0));
        assert!(Number::from_str("0.1").unwrap() > Number::from_i64(0));
    }
}
