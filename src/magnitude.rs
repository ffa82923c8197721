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

//! Unbounded integer arithmetic over ASCII decimal digit strings.
//!
//! A magnitude is a sequence of ASCII digits, most significant digit first,
//! denoting an unsigned integer. Magnitudes carry no sign and no exponent;
//! callers track both separately. Operands may carry leading zeros; results
//! never do, except for the single digit `0`.

use std::cmp::Ordering;

/// Reports whether a magnitude denotes zero.
pub(crate) fn is_zero(a: &[u8]) -> bool {
    a.iter().all(|&d| d == b'0')
}

fn strip_leading_zeros(a: &[u8]) -> &[u8] {
    match a.iter().position(|&d| d != b'0') {
        Some(i) => &a[i..],
        None => &[],
    }
}

fn from_digits(mut digits: Vec<u8>) -> Vec<u8> {
    let lead = digits.len() - strip_leading_zeros(&digits).len();
    digits.drain(..lead);
    if digits.is_empty() {
        digits.push(b'0');
    }
    digits
}

/// Compares two magnitudes as integers.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Adds two magnitudes.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0;
    let mut ai = a.iter().rev();
    let mut bi = b.iter().rev();
    loop {
        let (x, y) = match (ai.next(), bi.next()) {
            (None, None) => break,
            (x, y) => (
                x.map_or(0, |&d| d - b'0'),
                y.map_or(0, |&d| d - b'0'),
            ),
        };
        let sum = x + y + carry;
        carry = sum / 10;
        out.push(b'0' + sum % 10);
    }
    if carry > 0 {
        out.push(b'0' + carry);
    }
    out.reverse();
    from_digits(out)
}

/// Subtracts `b` from `a`.
///
/// `a` must be greater than or equal to `b`; the caller arranges operands so
/// that the difference is non-negative and tracks the sign itself.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    let mut ai = a.iter().rev();
    let mut bi = b.iter().rev();
    loop {
        let (x, y) = match (ai.next(), bi.next()) {
            (None, None) => break,
            (x, y) => (
                x.map_or(0, |&d| d - b'0') as i8,
                y.map_or(0, |&d| d - b'0') as i8,
            ),
        };
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(b'0' + diff as u8);
    }
    debug_assert_eq!(borrow, 0);
    out.reverse();
    from_digits(out)
}

/// Multiplies two magnitudes by long multiplication.
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    if a.is_empty() || b.is_empty() {
        return vec![b'0'];
    }
    // Column sums accumulate at most 81 per digit pair, so u64 cells cannot
    // overflow for any operand length that fits in memory.
    let mut w = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let x = (x - b'0') as u64;
        for (j, &y) in b.iter().enumerate() {
            w[i + j + 1] += x * (y - b'0') as u64;
        }
    }
    for k in (1..w.len()).rev() {
        w[k - 1] += w[k] / 10;
        w[k] %= 10;
    }
    from_digits(w.into_iter().map(|d| b'0' + d as u8).collect())
}

/// Divides `n` by `d`, truncating toward zero.
///
/// `d` must be nonzero; the caller surfaces division by zero before reaching
/// the magnitude engine.
pub(crate) fn div(n: &[u8], d: &[u8]) -> Vec<u8> {
    let d = strip_leading_zeros(d);
    debug_assert!(!d.is_empty());
    // Schoolbook long division, with the nine multiples of the divisor
    // computed up front so each quotient digit costs one scan.
    let mut multiples: Vec<Vec<u8>> = Vec::with_capacity(10);
    multiples.push(vec![b'0']);
    for q in 1..10 {
        let next = add(&multiples[q - 1], d);
        multiples.push(next);
    }
    let mut quotient = Vec::with_capacity(n.len());
    let mut rem: Vec<u8> = Vec::new();
    for &digit in n {
        rem.push(digit);
        let mut q = 0;
        for candidate in (1..10).rev() {
            if cmp(&multiples[candidate], &rem) != Ordering::Greater {
                q = candidate;
                break;
            }
        }
        if q > 0 {
            rem = sub(&rem, &multiples[q]);
        }
        quotient.push(b'0' + q as u8);
    }
    from_digits(quotient)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[u8]) -> &str {
        std::str::from_utf8(v).unwrap()
    }

    #[test]
    fn test_cmp() {
        assert_eq!(cmp(b"0", b"000"), Ordering::Equal);
        assert_eq!(cmp(b"9", b"10"), Ordering::Less);
        assert_eq!(cmp(b"0010", b"9"), Ordering::Greater);
        assert_eq!(cmp(b"12345", b"12346"), Ordering::Less);
        assert_eq!(cmp(b"", b"0"), Ordering::Equal);
    }

    #[test]
    fn test_add() {
        assert_eq!(s(&add(b"0", b"0")), "0");
        assert_eq!(s(&add(b"999", b"1")), "1000");
        assert_eq!(s(&add(b"12375", b"5000")), "17375");
        assert_eq!(
            s(&add(b"99999999999999999999999999", b"1")),
            "100000000000000000000000000"
        );
    }

    #[test]
    fn test_sub() {
        assert_eq!(s(&sub(b"1000", b"1")), "999");
        assert_eq!(s(&sub(b"17375", b"5000")), "12375");
        assert_eq!(s(&sub(b"5", b"5")), "0");
        assert_eq!(
            s(&sub(b"100000000000000000000000000", b"1")),
            "99999999999999999999999999"
        );
    }

    #[test]
    fn test_mul() {
        assert_eq!(s(&mul(b"0", b"12345")), "0");
        assert_eq!(s(&mul(b"99", b"99")), "9801");
        assert_eq!(s(&mul(b"12345679", b"9")), "111111111");
        assert_eq!(
            s(&mul(b"123456789123456789", b"987654321987654321")),
            "121932631356500531347203169112635269"
        );
    }

    #[test]
    fn test_div() {
        assert_eq!(s(&div(b"9801", b"99")), "99");
        assert_eq!(s(&div(b"1000", b"3")), "333");
        assert_eq!(s(&div(b"1", b"3")), "0");
        assert_eq!(s(&div(b"0", b"7")), "0");
        assert_eq!(
            s(&div(b"121932631356500531347203169112635269", b"987654321987654321")),
            "123456789123456789"
        );
    }

    #[test]
    fn test_div_truncates() {
        assert_eq!(s(&div(b"7", b"2")), "3");
        assert_eq!(s(&div(b"19999", b"10000")), "1");
        assert_eq!(s(&div(b"99999", b"10000")), "9");
    }
}
