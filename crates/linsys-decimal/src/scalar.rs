//! Fixed-precision decimal scalars.
//!
//! This module provides the number type shared by vectors, hyperplanes and
//! the linear system solver. Values are exact decimals rounded to
//! [`PRECISION`] significant digits, so `0.1 + 0.2 == 0.3` holds and
//! quotients such as `23 / 9` carry thirty digits.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Abs, SquareRoot};
use dashu::float::DBig;
use dashu::integer::IBig;
use num_traits::{One, Zero};

use crate::tolerance::{tolerance, PRECISION};
use crate::ScalarError;

/// A decimal number with a working precision of 30 significant digits.
///
/// `==` is exact. Use [`Zero::is_zero`] or [`crate::approx_eq`] for the
/// tolerance-based comparisons geometry code should rely on.
#[derive(Clone, PartialEq, PartialOrd)]
pub struct Scalar(DBig);

impl Scalar {
    fn with_working_precision(value: DBig) -> Self {
        Self(value.with_precision(PRECISION).value())
    }

    /// Creates `significand * 10^exponent`.
    #[must_use]
    pub fn from_parts(significand: i64, exponent: isize) -> Self {
        Self::with_working_precision(DBig::from_parts(IBig::from(significand), exponent))
    }

    /// Returns the shared near-zero tolerance as a scalar.
    #[must_use]
    pub fn tolerance() -> Self {
        Self::with_working_precision(tolerance().clone())
    }

    /// Returns true if the value is strictly below zero (exact comparison).
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < DBig::ZERO
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] if the value is within
    /// tolerance of zero.
    pub fn recip(&self) -> Result<Self, ScalarError> {
        Self::one().checked_div(self)
    }

    /// Divides by `rhs`, refusing negligible divisors.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] if `rhs` is within tolerance
    /// of zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ScalarError> {
        if rhs.is_zero() {
            return Err(ScalarError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Computes the square root, rounded to the working precision.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::NegativeSqrt`] for values clearly below zero.
    /// Negative values within tolerance of zero have root zero.
    pub fn sqrt(&self) -> Result<Self, ScalarError> {
        if self.is_negative() {
            if self.is_zero() {
                return Ok(Self::zero());
            }
            return Err(ScalarError::NegativeSqrt(self.to_string()));
        }
        if self.0 == DBig::ZERO {
            return Ok(Self::zero());
        }
        Ok(Self::with_working_precision(self.0.sqrt()))
    }

    /// Computes the arc-cosine in radians.
    ///
    /// The argument is clamped into `[-1, 1]` first so that values such as
    /// `1.000…01` produced by rounding do not yield NaN.
    ///
    /// # Errors
    ///
    /// Fails only if the `f64` result cannot be represented, which does not
    /// happen for a clamped argument.
    pub fn acos(&self) -> Result<Self, ScalarError> {
        Self::try_from(self.to_f64().clamp(-1.0, 1.0).acos())
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Renders the value with exactly `places` digits after the decimal point,
    /// rounding half away from zero.
    ///
    /// ```
    /// use linsys_decimal::Scalar;
    ///
    /// let x: Scalar = "2.345".parse().unwrap();
    /// assert_eq!(x.format_fixed(2), "2.35");
    /// assert_eq!(Scalar::from(-3).format_fixed(1), "-3.0");
    /// ```
    #[must_use]
    pub fn format_fixed(&self, places: usize) -> String {
        let rendered = self.to_string();
        let (negative, magnitude) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered.as_str()),
        };
        let (int_part, frac_part) = magnitude.split_once('.').unwrap_or((magnitude, ""));

        let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
        let mut frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
        let round_up = frac.get(places).is_some_and(|&d| d >= 5);
        frac.resize(places, 0);
        digits.extend(frac);

        if round_up {
            let mut carry = true;
            for d in digits.iter_mut().rev() {
                if *d == 9 {
                    *d = 0;
                } else {
                    *d += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, 1);
            }
        }

        let split = digits.len() - places;
        let int_digits: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
        let frac_digits: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();
        let is_zero = digits.iter().all(|&d| d == 0);

        let mut out = String::new();
        if negative && !is_zero {
            out.push('-');
        }
        out.push_str(&int_digits);
        if places > 0 {
            out.push('.');
            out.push_str(&frac_digits);
        }
        out
    }

    /// Returns the inner `dashu::float::DBig`.
    #[must_use]
    pub fn into_inner(self) -> DBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::float::DBig`.
    #[must_use]
    pub fn as_inner(&self) -> &DBig {
        &self.0
    }
}

/// Places the decimal point of `significand * 10^exponent`, dropping
/// trailing fractional zeros.
fn render_decimal(significand: &str, exponent: isize) -> String {
    let (negative, digits) = match significand.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, significand),
    };

    let body = if exponent >= 0 {
        if digits == "0" {
            "0".to_string()
        } else {
            format!("{digits}{}", "0".repeat(exponent.unsigned_abs()))
        }
    } else {
        let places = exponent.unsigned_abs();
        let padded = if digits.len() <= places {
            format!("{}{digits}", "0".repeat(places - digits.len() + 1))
        } else {
            digits.to_string()
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - places);
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            int_part.to_string()
        } else {
            format!("{int_part}.{frac_part}")
        }
    };

    if negative && body != "0" {
        format!("-{body}")
    } else {
        body
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self::with_working_precision(DBig::ZERO)
    }

    /// Tolerance-based: true if `|self| < 10^TOLERANCE_EXPONENT`.
    fn is_zero(&self) -> bool {
        self.abs().0 < *tolerance()
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self::from(1)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({self})")
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self.0.repr();
        f.write_str(&render_decimal(
            &repr.significand().to_string(),
            repr.exponent(),
        ))
    }
}

impl FromStr for Scalar {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DBig::from_str(s.trim())
            .map(Self::with_working_precision)
            .map_err(|_| ScalarError::Parse {
                input: s.to_string(),
            })
    }
}

impl TryFrom<f64> for Scalar {
    type Error = ScalarError;

    /// Converts through the shortest decimal rendering of the float, so
    /// `0.1` becomes exactly `0.1` rather than its binary expansion.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ScalarError::NonFinite(value));
        }
        format!("{value}").parse()
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::from_parts(n, 0)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::from_parts(i64::from(n), 0)
    }
}

// Arithmetic operations
impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Self;

    fn add(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 + &rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Self;

    fn sub(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 - &rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Self;

    fn mul(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 * &rhs.0)
    }
}

/// # Panics
///
/// Panics if the divisor is exactly zero. Use [`Scalar::checked_div`] when
/// the divisor has not already been checked against the tolerance.
impl Div for Scalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Scalar> for Scalar {
    type Output = Self;

    fn div(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 / &rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        Scalar(-self.0.clone())
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}
