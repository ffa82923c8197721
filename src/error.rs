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

use std::error::Error;
use std::fmt;

/// An error indicating that a string is not a valid decimal number.
///
/// A string is rejected when, after sanitization, it does not consist of at
/// least one digit, optionally preceded by a sign, optionally followed by a
/// radix mark and a fractional part, optionally followed by `e` and an
/// integer exponent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseDecimalError {
    pub(crate) input: String,
}

impl ParseDecimalError {
    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid decimal syntax: {:?}", self.input)
    }
}

impl Error for ParseDecimalError {}

/// An error indicating that a divisor was exactly zero.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DivisionByZeroError;

impl fmt::Display for DivisionByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("division by zero")
    }
}

impl Error for DivisionByZeroError {}

/// An error indicating that a floating-point value has no finite decimal
/// representation.
///
/// Raised when converting a NaN or infinite float to a decimal. Every finite
/// float converts via its shortest round-trip decimal form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TryFromFloatError;

impl fmt::Display for TryFromFloatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("float cannot be expressed as a finite decimal")
    }
}

impl Error for TryFromFloatError {}

/// An error indicating that an [`Operand`](crate::Operand) could not be
/// coerced to a decimal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CoerceDecimalError {
    /// The operand was text that failed to parse.
    Parse(ParseDecimalError),
    /// The operand was a non-finite float.
    Float(TryFromFloatError),
}

impl fmt::Display for CoerceDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoerceDecimalError::Parse(e) => e.fmt(f),
            CoerceDecimalError::Float(e) => e.fmt(f),
        }
    }
}

impl Error for CoerceDecimalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CoerceDecimalError::Parse(e) => Some(e),
            CoerceDecimalError::Float(e) => Some(e),
        }
    }
}

impl From<ParseDecimalError> for CoerceDecimalError {
    fn from(e: ParseDecimalError) -> CoerceDecimalError {
        CoerceDecimalError::Parse(e)
    }
}

impl From<TryFromFloatError> for CoerceDecimalError {
    fn from(e: TryFromFloatError) -> CoerceDecimalError {
        CoerceDecimalError::Float(e)
    }
}
