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

/// Algorithms for breaking ties when rounding decimal numbers.
///
/// Rounding only occurs when a value is re-expressed at a coarser exponent
/// than it can exactly represent, via [`Decimal::quantize`] or
/// [`Decimal::round`]. All four algorithms agree except when the discarded
/// digits denote exactly half of the last retained place.
///
/// [`Decimal::quantize`]: crate::Decimal::quantize
/// [`Decimal::round`]: crate::Decimal::round
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Rounding {
    /// Round ties away from zero, toward the neighbor with the larger
    /// magnitude. Note that this is magnitude-based, not direction-based:
    /// `-0.05` rounded to one place is `-0.1`, not `0`.
    HalfUp,
    /// Round ties toward zero, toward the neighbor with the smaller
    /// magnitude.
    HalfDown,
    /// Round ties so that the last retained digit is even.
    HalfEven,
    /// Round ties so that the last retained digit is odd.
    HalfOdd,
}

impl Default for Rounding {
    fn default() -> Rounding {
        Rounding::HalfUp
    }
}
