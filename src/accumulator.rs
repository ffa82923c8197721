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

use std::fmt;

use crate::decimal::Decimal;

/// A running decimal sum.
///
/// Decimals are immutable values; an accumulator is the explicit mutable
/// counterpart for code that folds many addends into one total, such as a
/// ledger tallying line items. Addends are applied left to right, each at
/// the accumulator's scale policy: by default every step infers its scale
/// from the operands, or a fixed scale can be set at construction.
///
/// # Examples
///
/// ```
/// use bigdec::{Accumulator, Decimal};
///
/// let mut acc = Accumulator::new();
/// acc.increase(vec!["1.50".parse::<Decimal>()?, "2.25".parse()?]);
/// acc.decrease(vec!["0.75".parse::<Decimal>()?]);
/// assert_eq!(acc.total().to_string(), "3");
/// # Ok::<_, bigdec::ParseDecimalError>(())
/// ```
#[derive(Clone, Default)]
pub struct Accumulator {
    total: Decimal,
    scale: Option<usize>,
}

impl Accumulator {
    /// Constructs an accumulator starting at zero with inferred scales.
    pub fn new() -> Accumulator {
        Accumulator {
            total: Decimal::zero(),
            scale: None,
        }
    }

    /// Constructs an accumulator that carries out every step at the given
    /// scale.
    pub fn with_scale(scale: usize) -> Accumulator {
        Accumulator {
            total: Decimal::zero(),
            scale: Some(scale),
        }
    }

    /// Adds a single value to the total.
    pub fn add<V>(&mut self, value: V)
    where
        V: Into<Decimal>,
    {
        self.total = self.total.add(&value.into(), self.scale);
    }

    /// Subtracts a single value from the total.
    pub fn sub<V>(&mut self, value: V)
    where
        V: Into<Decimal>,
    {
        self.total = self.total.subtract(&value.into(), self.scale);
    }

    /// Increases the total by each of the given values, left to right.
    pub fn increase<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Decimal>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Decreases the total by each of the given values, left to right.
    pub fn decrease<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Decimal>,
    {
        for value in values {
            self.sub(value);
        }
    }

    /// Returns the current total.
    pub fn total(&self) -> &Decimal {
        &self.total
    }

    /// Consumes the accumulator, returning the total.
    pub fn into_total(self) -> Decimal {
        self.total
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("total", &self.total)
            .field("scale", &self.scale)
            .finish()
    }
}

impl<V> Extend<V> for Accumulator
where
    V: Into<Decimal>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.increase(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_items() {
        let mut acc = Accumulator::new();
        acc.increase(vec![1i64, 2, 3]);
        acc.add(10u32);
        acc.sub("6".parse::<Decimal>().unwrap());
        assert_eq!(acc.total().to_string(), "10");
    }

    #[test]
    fn test_fixed_scale() {
        let mut acc = Accumulator::with_scale(2);
        acc.increase(vec!["1.005".parse::<Decimal>().unwrap(), "2.009".parse().unwrap()]);
        // Each step truncates to two places: 1.00, then 3.00.
        assert_eq!(acc.total().to_string(), "3");
    }
}
