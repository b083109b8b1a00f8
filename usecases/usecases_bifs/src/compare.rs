//! Comparison Built-in Function
//!
//! Three-way comparison of a big number against any numeric operand.
//! Doubles are compared by their exact value rather than their truncation,
//! so `1 < 1.5` holds.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;

use entities_utilities::{BigNumber, BignumError, Numeric};

/// Comparison built-in function
pub struct CompareBif;

impl CompareBif {
    /// Compare `x` with `y`
    ///
    /// # Returns
    /// * `Ok(Ordering)` - How `x` orders relative to `y`
    /// * `Err(BignumError::Conversion)` - If `y` is NaN
    pub fn compare(x: &BigNumber, y: &Numeric<'_>) -> Result<Ordering, BignumError> {
        match y {
            Numeric::Double(d) => x.partial_cmp_f64(*d).ok_or_else(|| BignumError::Conversion {
                position: Some(1),
                type_name: y.type_name(),
                value: d.to_string(),
            }),
            Numeric::UnsignedFixed(u) => Ok(x.cmp_u64(*u)),
            Numeric::SignedFixed(i) => Ok(x.cmp_i64(*i)),
            Numeric::Big(b) => Ok(x.cmp(b)),
        }
    }

    /// Map an ordering to -1, 0 or 1
    pub fn to_sign(ordering: Ordering) -> i32 {
        match ordering {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}
