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

use crate::decimal::Decimal;
use crate::rounding::Rounding;

/// Renders decimals as human-readable strings.
///
/// A formatter controls three things: the number of fractional places the
/// value is rounded to before rendering (none means "as many as the value
/// needs"), the string inserted between groups of three integer digits, and
/// the radix mark printed before the fractional part.
///
/// The default formatter is the canonical wire format: plain decimal
/// notation, a `.` radix mark, no grouping, and no rounding. Its output
/// parses back to the same canonical value.
///
/// # Examples
///
/// ```
/// use bigdec::{Decimal, Formatter};
///
/// let d: Decimal = "6.22e23".parse()?;
/// assert_eq!(
///     Formatter::new().places(2).grouping(",").format(&d),
///     "622,000,000,000,000,000,000,000.00",
/// );
/// # Ok::<_, bigdec::ParseDecimalError>(())
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Formatter {
    places: Option<usize>,
    grouping: String,
    radix_mark: String,
}

impl Default for Formatter {
    fn default() -> Formatter {
        Formatter::new()
    }
}

impl Formatter {
    /// Constructs the raw formatter: no rounding, no grouping, `.` as the
    /// radix mark.
    pub fn new() -> Formatter {
        Formatter {
            places: None,
            grouping: String::new(),
            radix_mark: ".".into(),
        }
    }

    /// Constructs a money formatter: two fractional places, no grouping.
    pub fn money() -> Formatter {
        Formatter::new().places(2)
    }

    /// Constructs a grouped money formatter: two fractional places, `,`
    /// between groups of three integer digits.
    pub fn grouped_money() -> Formatter {
        Formatter::money().grouping(",")
    }

    /// Sets the number of fractional places, or clears it with `None`.
    pub fn places<P>(mut self, places: P) -> Formatter
    where
        P: Into<Option<usize>>,
    {
        self.places = places.into();
        self
    }

    /// Sets the string inserted between groups of three integer digits.
    /// The empty string disables grouping.
    pub fn grouping<S>(mut self, grouping: S) -> Formatter
    where
        S: Into<String>,
    {
        self.grouping = grouping.into();
        self
    }

    /// Sets the string printed in place of the decimal point.
    pub fn radix_mark<S>(mut self, radix_mark: S) -> Formatter
    where
        S: Into<String>,
    {
        self.radix_mark = radix_mark.into();
        self
    }

    /// Formats a decimal.
    ///
    /// The value is compressed, then rounded half-up to the configured
    /// number of places if that differs from its scale. A value that rounds
    /// away to negative zero keeps its sign, so a money formatter renders
    /// `-1e-10` as `-0.00`.
    pub fn format(&self, decimal: &Decimal) -> String {
        let mut value = decimal.compress();
        if let Some(places) = self.places {
            if places != value.scale() {
                value = value.round(places as i64, Rounding::HalfUp);
            }
        }
        self.render(&value)
    }

    /// Formats an optional decimal, treating an absent value as zero.
    pub fn format_opt(&self, decimal: Option<&Decimal>) -> String {
        match decimal {
            Some(d) => self.format(d),
            None => self.format(&Decimal::zero()),
        }
    }

    fn render(&self, value: &Decimal) -> String {
        let digits = value.digits.as_bytes();
        let scale = value.scale();
        let (int_part, frac_part) = if value.exponent >= 0 {
            let mut int_part = value.digits.clone();
            int_part.extend(std::iter::repeat('0').take(value.exponent as usize));
            (int_part, String::new())
        } else {
            let take = digits.len().min(scale);
            let mut frac_part = "0".repeat(scale - take);
            frac_part.push_str(&value.digits[digits.len() - take..]);
            (value.digits[..digits.len() - take].to_string(), frac_part)
        };
        let int_part = if int_part.is_empty() {
            "0".into()
        } else {
            int_part
        };
        let mut out = String::new();
        if value.negative {
            out.push('-');
        }
        if self.grouping.is_empty() {
            out.push_str(&int_part);
        } else {
            // Group into threes from the right; the leftmost group may be
            // short.
            let first = match int_part.len() % 3 {
                0 => 3,
                n => n,
            };
            out.push_str(&int_part[..first]);
            let mut rest = &int_part[first..];
            while !rest.is_empty() {
                out.push_str(&self.grouping);
                out.push_str(&rest[..3]);
                rest = &rest[3..];
            }
        }
        if !frac_part.is_empty() {
            out.push_str(&self.radix_mark);
            out.push_str(&frac_part);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_raw_is_canonical() {
        let f = Formatter::new();
        assert_eq!(f.format(&d("0.500")), "0.5");
        assert_eq!(f.format(&d("-25000")), "-25000");
        assert_eq!(f.format(&d("1e-10")), "0.0000000001");
    }

    #[test]
    fn test_grouping_lengths() {
        let f = Formatter::new().grouping(" ");
        assert_eq!(f.format(&d("1")), "1");
        assert_eq!(f.format(&d("12")), "12");
        assert_eq!(f.format(&d("123")), "123");
        assert_eq!(f.format(&d("1234")), "1 234");
        assert_eq!(f.format(&d("12345678")), "12 345 678");
        assert_eq!(f.format(&d("1234.5678")), "1 234.5678");
    }

    #[test]
    fn test_format_opt() {
        assert_eq!(Formatter::money().format_opt(None), "0.00");
        let d = d("1");
        assert_eq!(Formatter::money().format_opt(Some(&d)), "1.00");
    }
}
