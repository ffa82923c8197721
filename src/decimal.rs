// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{
    CoerceDecimalError, DivisionByZeroError, ParseDecimalError, TryFromFloatError,
};
use crate::format::Formatter;
use crate::magnitude;
use crate::rounding::Rounding;

/// An exact, arbitrary-precision decimal number.
///
/// A decimal is a sign, an unsigned digit magnitude of unbounded length, and
/// a power-of-ten exponent; the value is `±magnitude × 10^exponent`. Every
/// finite decimal value is representable without rounding error. There are
/// no infinities and no NaN, so decimals are totally ordered and hashable.
///
/// Arithmetic operations take an optional *scale*, the number of fractional
/// digits in the result. When no scale is given, one is inferred: addition,
/// subtraction, and division use the larger of the operand scales, while
/// multiplication uses the sum of the operand scales (which is always exact).
/// Reducing the scale of a result truncates toward zero; directed rounding is
/// available separately via [`Decimal::quantize`] and [`Decimal::round`].
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decimal {
    pub(crate) digits: String,
    pub(crate) exponent: i64,
    pub(crate) negative: bool,
}

/// A tagged value that can be coerced to a [`Decimal`].
///
/// This is the single heterogeneous entry point for callers that receive
/// numbers of mixed provenance; code that knows its input kind should prefer
/// the corresponding `From`/`TryFrom`/`FromStr` conversion directly.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// A signed integer, converted exactly.
    Int(i128),
    /// An unsigned integer, converted exactly.
    Uint(u128),
    /// A binary float, converted via its shortest round-trip decimal form.
    Float(f64),
    /// Numeric text, parsed with the usual sanitization rules.
    Text(&'a str),
    /// An existing decimal, copied as-is.
    Decimal(&'a Decimal),
}

impl<'a> From<i64> for Operand<'a> {
    fn from(n: i64) -> Operand<'a> {
        Operand::Int(n.into())
    }
}

impl<'a> From<f64> for Operand<'a> {
    fn from(n: f64) -> Operand<'a> {
        Operand::Float(n)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(s: &'a str) -> Operand<'a> {
        Operand::Text(s)
    }
}

impl<'a> From<&'a Decimal> for Operand<'a> {
    fn from(d: &'a Decimal) -> Operand<'a> {
        Operand::Decimal(d)
    }
}

impl Decimal {
    /// Constructs a decimal representing the number 0.
    pub fn zero() -> Decimal {
        Decimal {
            digits: "0".into(),
            exponent: 0,
            negative: false,
        }
    }

    /// Constructs a decimal representing the number 1.
    pub fn one() -> Decimal {
        Decimal {
            digits: "1".into(),
            exponent: 0,
            negative: false,
        }
    }

    /// Coerces a tagged [`Operand`] to a decimal.
    pub fn coerce(operand: Operand) -> Result<Decimal, CoerceDecimalError> {
        match operand {
            Operand::Int(n) => Ok(Decimal::from(n)),
            Operand::Uint(n) => Ok(Decimal::from(n)),
            Operand::Float(n) => Ok(Decimal::try_from(n)?),
            Operand::Text(s) => Ok(s.parse()?),
            Operand::Decimal(d) => Ok(d.clone()),
        }
    }

    /// Returns the digits of the magnitude, most significant first.
    ///
    /// The magnitude carries no sign and no radix point; see
    /// [`Decimal::exponent`] for the placement of the latter.
    pub fn coefficient(&self) -> &str {
        &self.digits
    }

    /// Returns the power-of-ten exponent applied to the magnitude.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns the number of digits after the radix point required to
    /// represent this value exactly.
    pub fn scale(&self) -> usize {
        if self.exponent >= 0 {
            0
        } else {
            -self.exponent as usize
        }
    }

    /// Reports whether the value is zero.
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(self.digits.as_bytes())
    }

    /// Reports whether the value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Reports whether the value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Reports whether the sign flag is set.
    ///
    /// Unlike [`Decimal::is_negative`] this inspects the representation, not
    /// the value: a zero produced by rounding a negative number retains its
    /// sign flag until compressed.
    pub fn is_signed(&self) -> bool {
        self.negative
    }

    /// Returns the absolute value as a new decimal.
    pub fn abs(&self) -> Decimal {
        let mut result = self.clone();
        result.negative = false;
        result
    }

    /// Flips the sign flag in place and reports whether the result is
    /// negative.
    pub fn negate(&mut self) -> bool {
        self.negative = !self.negative;
        self.negative
    }

    /// Returns this value in its canonical form.
    ///
    /// The canonical form uses the minimum number of digits that represent
    /// the value without loss: no leading zeros, no trailing zeros (each
    /// removed trailing zero is compensated by incrementing the exponent),
    /// and zero is always `0 × 10^0` with a positive sign. Compression is
    /// idempotent.
    pub fn compress(&self) -> Decimal {
        let digits = self.digits.as_bytes();
        let lead = digits.iter().take_while(|&&d| d == b'0').count();
        let digits = &digits[lead..];
        if digits.is_empty() {
            return Decimal::zero();
        }
        let trail = digits.iter().rev().take_while(|&&d| d == b'0').count();
        let digits = &digits[..digits.len() - trail];
        Decimal {
            digits: String::from_utf8(digits.to_vec()).expect("digits are valid UTF-8"),
            exponent: self.exponent + trail as i64,
            negative: self.negative,
        }
    }

    /// Adds `rhs` to this decimal.
    ///
    /// With no explicit scale the result has the larger of the two operand
    /// scales; an explicit smaller scale truncates the sum toward zero.
    pub fn add(&self, rhs: &Decimal, scale: Option<usize>) -> Decimal {
        let scale = result_scale(self, rhs, scale);
        self.add_signed(rhs, rhs.negative, scale)
    }

    /// Subtracts `rhs` from this decimal.
    ///
    /// Scale selection follows [`Decimal::add`].
    pub fn subtract(&self, rhs: &Decimal, scale: Option<usize>) -> Decimal {
        let scale = result_scale(self, rhs, scale);
        self.add_signed(rhs, !rhs.negative, scale)
    }

    fn add_signed(&self, rhs: &Decimal, rhs_negative: bool, scale: usize) -> Decimal {
        let align = self.scale().max(rhs.scale());
        let a = self.aligned(align);
        let b = rhs.aligned(align);
        let (digits, negative) = if self.negative == rhs_negative {
            (magnitude::add(&a, &b), self.negative)
        } else {
            match magnitude::cmp(&a, &b) {
                Ordering::Equal => (vec![b'0'], false),
                Ordering::Greater => (magnitude::sub(&a, &b), self.negative),
                Ordering::Less => (magnitude::sub(&b, &a), rhs_negative),
            }
        };
        let (digits, exponent) = rescale_trunc(digits, -(align as i64), scale);
        Decimal::reduced(digits, exponent, negative)
    }

    /// Multiplies this decimal by `rhs`.
    ///
    /// With no explicit scale the result has the sum of the two operand
    /// scales, at which multiplication of exact decimals is always exact; an
    /// explicit smaller scale truncates the product toward zero.
    pub fn multiply(&self, rhs: &Decimal, scale: Option<usize>) -> Decimal {
        let scale = scale.unwrap_or_else(|| self.scale() + rhs.scale());
        let digits = magnitude::mul(self.digits.as_bytes(), rhs.digits.as_bytes());
        let exponent = self.exponent + rhs.exponent;
        let negative = self.negative != rhs.negative;
        let (digits, exponent) = rescale_trunc(digits, exponent, scale);
        Decimal::reduced(digits, exponent, negative)
    }

    /// Divides this decimal by `rhs`.
    ///
    /// The quotient is computed to exactly the requested number of fractional
    /// digits and truncated toward zero; with no explicit scale the larger of
    /// the two operand scales is used. Fails if `rhs` is zero.
    pub fn divide(&self, rhs: &Decimal, scale: Option<usize>) -> Result<Decimal, DivisionByZeroError> {
        if rhs.is_zero() {
            return Err(DivisionByZeroError);
        }
        let scale = result_scale(self, rhs, scale);
        // Shift the numerator (or, for a negative net shift, the denominator)
        // so that truncating integer division yields `scale` fractional
        // digits.
        let shift = self.exponent - rhs.exponent + scale as i64;
        let quotient = if shift >= 0 {
            let mut numer = self.digits.clone().into_bytes();
            numer.extend(std::iter::repeat(b'0').take(shift as usize));
            magnitude::div(&numer, rhs.digits.as_bytes())
        } else {
            let mut denom = rhs.digits.clone().into_bytes();
            denom.extend(std::iter::repeat(b'0').take(-shift as usize));
            magnitude::div(self.digits.as_bytes(), &denom)
        };
        let negative = self.negative != rhs.negative;
        Ok(Decimal::reduced(quotient, -(scale as i64), negative))
    }

    /// Returns the multiplicative inverse `1 / self`.
    ///
    /// With no explicit scale the division is carried out at scale
    /// `max(0, exponent + 1)`, which gives small and large magnitudes alike a
    /// usable default precision. Fails if this decimal is zero.
    pub fn inverse(&self, scale: Option<usize>) -> Result<Decimal, DivisionByZeroError> {
        let scale = scale.unwrap_or(if self.exponent >= 0 {
            self.exponent as usize + 1
        } else {
            0
        });
        Decimal::one().divide(self, Some(scale))
    }

    /// Re-expresses this value at the given exponent.
    ///
    /// Moving to a smaller exponent appends zeros and is always exact. Moving
    /// to a larger exponent discards low-order digits: a synthetic round-off
    /// of five (or, when `rounding` calls for the tie to go the other way,
    /// four) tenths of the target unit is added to the magnitude before the
    /// discarded digits are cut, so carries cascade through the retained
    /// digits. The result always has exactly the requested exponent.
    pub fn quantize(&self, exponent: i64, rounding: Rounding) -> Decimal {
        let mut result = self.compress();
        if exponent == result.exponent {
            return result;
        }
        if exponent < result.exponent {
            let count = (result.exponent - exponent) as usize;
            result.digits.extend(std::iter::repeat('0').take(count));
            result.exponent = exponent;
            return result;
        }
        let count = (exponent - result.exponent) as usize;
        let digits = result.digits.as_bytes();
        let kept = digits.len().saturating_sub(count);
        // Parity of the last retained digit decides the tie direction for
        // the even/odd rules; a magnitude shorter than the cut counts as
        // even.
        let prev_even = kept == 0 || (digits[kept - 1] - b'0') % 2 == 0;
        let round_down = match rounding {
            Rounding::HalfUp => false,
            Rounding::HalfDown => true,
            Rounding::HalfEven => prev_even,
            Rounding::HalfOdd => !prev_even,
        };
        let mut addend = Vec::with_capacity(count);
        addend.push(if round_down { b'4' } else { b'5' });
        addend.extend(std::iter::repeat(b'0').take(count - 1));
        let sum = magnitude::add(digits, &addend);
        let digits = &sum[..sum.len() - count];
        Decimal {
            digits: if digits.is_empty() {
                "0".into()
            } else {
                String::from_utf8(digits.to_vec()).expect("digits are valid UTF-8")
            },
            exponent,
            // The sign flag survives even when the magnitude rounds away to
            // zero; display canonicalizes, but formatters that pad a rounded
            // negative zero rely on the flag.
            negative: result.negative,
        }
    }

    /// Rounds this value to `places` decimal places.
    ///
    /// Negative `places` round to the ones place; rounding never coarsens
    /// past the ones place implicitly, so `round` cannot produce a multiple
    /// of ten the way [`Decimal::quantize`] with a positive exponent can.
    pub fn round(&self, places: i64, rounding: Rounding) -> Decimal {
        self.quantize(0.min(-places), rounding)
    }

    /// Returns an approximation of this value as a binary float.
    ///
    /// Values outside the range of `f64` overflow to infinity or underflow
    /// to zero.
    pub fn to_f64(&self) -> f64 {
        self.to_string()
            .parse()
            .expect("decimal text is valid float syntax")
    }

    /// Formats this value with the given formatter.
    ///
    /// A convenience for [`Formatter::format`].
    pub fn format(&self, f: &Formatter) -> String {
        f.format(self)
    }

    /// The magnitude as an integer digit string at the given scale, which
    /// must be at least `self.scale()`.
    pub(crate) fn aligned(&self, scale: usize) -> Vec<u8> {
        let shift = self.exponent + scale as i64;
        debug_assert!(shift >= 0);
        let mut digits = self.digits.clone().into_bytes();
        digits.extend(std::iter::repeat(b'0').take(shift as usize));
        digits
    }

    /// Builds a decimal from raw parts, applying the parser's trim rules:
    /// leading zeros are dropped unconditionally, trailing zeros only while
    /// the value remains a whole number, and a vanished magnitude collapses
    /// to canonical zero.
    fn reduced(digits: Vec<u8>, mut exponent: i64, negative: bool) -> Decimal {
        let lead = digits.iter().take_while(|&&d| d == b'0').count();
        let mut digits = &digits[lead..];
        if exponent >= 0 {
            let trail = digits.iter().rev().take_while(|&&d| d == b'0').count();
            digits = &digits[..digits.len() - trail];
            exponent += trail as i64;
        }
        if digits.is_empty() {
            return Decimal::zero();
        }
        Decimal {
            digits: String::from_utf8(digits.to_vec()).expect("digits are valid UTF-8"),
            exponent,
            negative,
        }
    }
}

/// Returns the scale for an arithmetic result: the requested scale if one
/// was supplied, otherwise the larger of the two operand scales.
fn result_scale(a: &Decimal, b: &Decimal, scale: Option<usize>) -> usize {
    scale.unwrap_or_else(|| a.scale().max(b.scale()))
}

/// Truncates or zero-extends a magnitude so that it has exactly `scale`
/// fractional digits. Dropping low-order digits truncates toward zero.
fn rescale_trunc(mut digits: Vec<u8>, exponent: i64, scale: usize) -> (Vec<u8>, i64) {
    let target = -(scale as i64);
    if exponent > target {
        digits.extend(std::iter::repeat(b'0').take((exponent - target) as usize));
    } else if exponent < target {
        let drop = (target - exponent) as usize;
        if drop >= digits.len() {
            digits = vec![b'0'];
        } else {
            digits.truncate(digits.len() - drop);
        }
    }
    (digits, target)
}

impl Default for Decimal {
    fn default() -> Decimal {
        Decimal::zero()
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&Formatter::new().format(self))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
        // Sanitize: strip everything but digits, sign, radix mark, and
        // exponent marker, then drop trailing radix marks.
        let mut clean: String = s
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | 'e' | 'E'))
            .collect();
        while clean.ends_with('.') {
            clean.pop();
        }
        if !valid_syntax(clean.as_bytes()) {
            return Err(ParseDecimalError { input: s.into() });
        }
        let mut rest = clean.as_str();
        let negative = rest.starts_with('-');
        if negative {
            rest = &rest[1..];
        }
        let mut exponent: i64 = 0;
        if let Some(pos) = rest.find(|c: char| c == 'e' || c == 'E') {
            let exp = &rest[pos + 1..];
            if !exp.is_empty() && exp != "-" {
                exponent = exp
                    .parse()
                    .map_err(|_| ParseDecimalError { input: s.into() })?;
            }
            rest = &rest[..pos];
        }
        let digits = match rest.find('.') {
            Some(pos) => {
                exponent = exponent
                    .checked_sub((rest.len() - pos - 1) as i64)
                    .ok_or_else(|| ParseDecimalError { input: s.into() })?;
                let mut digits = Vec::with_capacity(rest.len() - 1);
                digits.extend_from_slice(&rest.as_bytes()[..pos]);
                digits.extend_from_slice(&rest.as_bytes()[pos + 1..]);
                digits
            }
            None => rest.as_bytes().to_vec(),
        };
        Ok(Decimal::reduced(digits, exponent, negative))
    }
}

/// Validates sanitized input against `-? digit+ (. digit*)? (e -? digit*)?`.
fn valid_syntax(s: &[u8]) -> bool {
    let mut i = 0;
    if i < s.len() && s[i] == b'-' {
        i += 1;
    }
    let integer_start = i;
    while i < s.len() && s[i].is_ascii_digit() {
        i += 1;
    }
    if i == integer_start {
        return false;
    }
    if i < s.len() && s[i] == b'.' {
        i += 1;
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < s.len() && (s[i] == b'e' || s[i] == b'E') {
        i += 1;
        if i < s.len() && s[i] == b'-' {
            i += 1;
        }
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
    }
    i == s.len()
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(n: $t) -> Decimal {
                    Decimal::from(i128::from(n))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(n: $t) -> Decimal {
                    Decimal::from(u128::from(n))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<i128> for Decimal {
    fn from(n: i128) -> Decimal {
        let mut d = Decimal::from(n.unsigned_abs());
        d.negative = n < 0;
        d
    }
}

impl From<u128> for Decimal {
    fn from(n: u128) -> Decimal {
        if n == 0 {
            return Decimal::zero();
        }
        let mut digits = n.to_string();
        let trimmed = digits.trim_end_matches('0').len();
        let exponent = (digits.len() - trimmed) as i64;
        digits.truncate(trimmed);
        Decimal {
            digits,
            exponent,
            negative: false,
        }
    }
}

impl TryFrom<f32> for Decimal {
    type Error = TryFromFloatError;

    fn try_from(n: f32) -> Result<Decimal, TryFromFloatError> {
        if !n.is_finite() {
            return Err(TryFromFloatError);
        }
        Ok(n.to_string()
            .parse()
            .expect("float display is valid decimal syntax"))
    }
}

impl TryFrom<f64> for Decimal {
    type Error = TryFromFloatError;

    fn try_from(n: f64) -> Result<Decimal, TryFromFloatError> {
        if !n.is_finite() {
            return Err(TryFromFloatError);
        }
        Ok(n.to_string()
            .parse()
            .expect("float display is valid decimal syntax"))
    }
}

impl From<&Decimal> for Decimal {
    fn from(d: &Decimal) -> Decimal {
        d.clone()
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        // Zero compares sign-insensitively, so a denormalized negative zero
        // is equal to zero.
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.negative {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, true) => {
                return if self.negative {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, false) => {}
        }
        if self.negative != other.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        let align = self.scale().max(other.scale());
        let ord = magnitude::cmp(&self.aligned(align), &other.aligned(align));
        if self.negative {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Decimal) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        // Hash the canonical form so that equal values hash equally
        // regardless of scale.
        let c = self.compress();
        c.digits.hash(state);
        c.exponent.hash(state);
        c.negative.hash(state);
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(mut self) -> Decimal {
        self.negative = !self.negative;
        self
    }
}

impl Add<Decimal> for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        Decimal::add(&self, &rhs, None)
    }
}

impl AddAssign<Decimal> for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        *self = Decimal::add(self, &rhs, None);
    }
}

impl Sub<Decimal> for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal::subtract(&self, &rhs, None)
    }
}

impl SubAssign<Decimal> for Decimal {
    fn sub_assign(&mut self, rhs: Decimal) {
        *self = Decimal::subtract(self, &rhs, None);
    }
}

impl Mul<Decimal> for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal::multiply(&self, &rhs, None)
    }
}

impl MulAssign<Decimal> for Decimal {
    fn mul_assign(&mut self, rhs: Decimal) {
        *self = Decimal::multiply(self, &rhs, None);
    }
}

impl Div<Decimal> for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Decimal) -> Decimal {
        Decimal::divide(&self, &rhs, None).expect("decimal division by zero")
    }
}

impl DivAssign<Decimal> for Decimal {
    fn div_assign(&mut self, rhs: Decimal) {
        *self = Decimal::divide(self, &rhs, None).expect("decimal division by zero");
    }
}

impl Sum for Decimal {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Decimal>,
    {
        let mut sum = Decimal::zero();
        for d in iter {
            sum = Decimal::add(&sum, &d, None);
        }
        sum
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Decimal>,
    {
        let mut sum = Decimal::zero();
        for d in iter {
            sum = Decimal::add(&sum, d, None);
        }
        sum
    }
}

impl Product for Decimal {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Decimal>,
    {
        let mut product = Decimal::one();
        for d in iter {
            product = Decimal::multiply(&product, &d, None);
        }
        product
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Decimal>,
    {
        let mut product = Decimal::one();
        for d in iter {
            product = Decimal::multiply(&product, d, None);
        }
        product
    }
}

#[cfg(feature = "num-traits")]
#[cfg_attr(docsrs, doc(cfg(feature = "num-traits")))]
impl num_traits::Zero for Decimal {
    fn zero() -> Decimal {
        Decimal::zero()
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

#[cfg(feature = "num-traits")]
#[cfg_attr(docsrs, doc(cfg(feature = "num-traits")))]
impl num_traits::One for Decimal {
    fn one() -> Decimal {
        Decimal::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_triple() {
        let x = d("-5.000067");
        assert_eq!(x.coefficient(), "5000067");
        assert_eq!(x.exponent(), -6);
        assert!(x.is_signed());

        let x = d("7500");
        assert_eq!(x.coefficient(), "75");
        assert_eq!(x.exponent(), 2);

        let x = d("0.500");
        assert_eq!(x.coefficient(), "500");
        assert_eq!(x.exponent(), -3);
        assert_eq!(x.scale(), 3);
    }

    #[test]
    fn test_parse_zero_canonicalizes() {
        for input in &["0", "-0", "0.000", "-0.00e5", "00e-3"] {
            let x = d(input);
            assert_eq!(x.coefficient(), "0", "input {}", input);
            assert_eq!(x.exponent(), 0, "input {}", input);
            assert!(!x.is_signed(), "input {}", input);
        }
    }

    #[test]
    fn test_parse_rejects() {
        for input in &["", "   ", "abc", "--1", "1-2", "5.5.5", "e9", "-"] {
            assert!(input.parse::<Decimal>().is_err(), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_rejects_exponent_overflow() {
        // The fractional adjustment would push the exponent below i64::MIN.
        assert!("1.5e-9223372036854775808".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_reduced_trims_integers_only() {
        // 7.50 keeps its trailing zero; 750 does not.
        assert_eq!(d("7.50").coefficient(), "750");
        assert_eq!(d("750").coefficient(), "75");
    }

    #[test]
    fn test_scale_inference() {
        let a = d("0.25");
        let b = d("0.1250");
        assert_eq!(Decimal::add(&a, &b, None).scale(), 4);
        assert_eq!(Decimal::add(&a, &b, Some(1)).to_string(), "0.3");
        assert_eq!(a.multiply(&b, None).scale(), 6);
    }

    #[test]
    fn test_inverse_default_scale() {
        assert_eq!(d("4").inverse(None).unwrap().to_string(), "0.2");
        assert_eq!(d("0.5").inverse(None).unwrap().to_string(), "2");
        // Default scale for 400 is exponent + 1 = 3.
        assert_eq!(d("400").inverse(None).unwrap().to_string(), "0.002");
        assert_eq!(d("3").inverse(Some(4)).unwrap().to_string(), "0.3333");
    }
}
