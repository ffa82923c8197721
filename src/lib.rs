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

//! bigdec is an exact, arbitrary-precision decimal arithmetic library.
//!
//! # Introduction
//!
//! Binary floating-point numbers can only approximate common decimal
//! numbers. The value 0.1, for example, would need an infinitely recurring
//! binary fraction, and so financial calculations performed in binary
//! floating point drift away from the results that would be calculated by
//! hand. bigdec instead stores a decimal digit magnitude of unbounded
//! length together with a sign and a power-of-ten exponent, so any finite
//! decimal value is represented exactly and arithmetic never silently loses
//! precision.
//!
//! Unlike fixed-size decimal formats there is no precision ceiling: the
//! digit strings grow as needed, and the cost of an operation is
//! proportional to the number of digits involved. Callers control precision
//! explicitly, either by passing a scale to an operation or by relying on
//! the inference rules (additive operations use the larger operand scale,
//! multiplication the sum of the scales).
//!
//! The main types exposed by this library are as follows:
//!
//!  * [`Decimal`], the immutable decimal value, with parsing, arithmetic,
//!    comparison, and quantization.
//!
//!  * [`Rounding`], the tie-breaking algorithms accepted by
//!    [`Decimal::quantize`] and [`Decimal::round`].
//!
//!  * [`Accumulator`], a mutable running sum for folding many addends into
//!    one total.
//!
//!  * [`Formatter`], which renders decimals with a fixed number of places,
//!    digit grouping, and a custom radix mark.
//!
//! # Examples
//!
//! The following example demonstrates the basic usage of the library:
//!
//! ```
//! # use std::error::Error;
//! use bigdec::Decimal;
//!
//! let x: Decimal = "0.1".parse()?;
//! let y: Decimal = "0.2".parse()?;
//! let z: Decimal = "0.3".parse()?;
//!
//! assert_eq!(x + y, z);
//! assert_eq!(z.to_string(), "0.3");
//!
//! # Ok::<_, Box<dyn Error>>(())
//! ```
//!
//! Division requires bounding the result scale, since a quotient like 1/3
//! has no exact finite representation:
//!
//! ```
//! # use std::error::Error;
//! use bigdec::Decimal;
//!
//! let one: Decimal = "1".parse()?;
//! let three: Decimal = "3".parse()?;
//! assert_eq!(one.divide(&three, Some(3))?.to_string(), "0.333");
//!
//! # Ok::<_, Box<dyn Error>>(())
//! ```

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod accumulator;
mod decimal;
mod error;
mod format;
mod magnitude;
mod rounding;

pub use accumulator::Accumulator;
pub use decimal::{Decimal, Operand};
pub use error::{
    CoerceDecimalError, DivisionByZeroError, ParseDecimalError, TryFromFloatError,
};
pub use format::Formatter;
pub use rounding::Rounding;
