//! Numeric Coercion
//!
//! Every non-receiver operand of an arithmetic, bitwise or comparison
//! operation arrives as a [`Numeric`] and is converted to a [`BigNumber`]
//! just before use.
//!
//! | Case | Conversion |
//! |------|------------|
//! | `Double` | truncated toward zero, NaN/infinity rejected |
//! | `UnsignedFixed` | exact |
//! | `SignedFixed` | exact, sign preserved |
//! | `Big` | value copy of the borrowed big number |
//!
//! `Numeric::Big` borrows its value. While any operand refers to a big number,
//! that number cannot be mutated, so an operand never observes a concurrent
//! bit mutation through another binding.

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

use crate::big::BigNumber;
use crate::error::BignumError;

/// An operand accepted by the big number operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<'a> {
    /// Native double; truncated toward zero when coerced
    Double(f64),
    /// Native unsigned 64-bit integer
    UnsignedFixed(u64),
    /// Native signed 64-bit integer
    SignedFixed(i64),
    /// An existing big number
    Big(&'a BigNumber),
}

impl<'a> Numeric<'a> {
    /// Runtime type name, as reported in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Numeric::Double(_) => "number",
            Numeric::UnsignedFixed(_) => "core/u64",
            Numeric::SignedFixed(_) => "core/s64",
            Numeric::Big(_) => "jmp/mpz",
        }
    }

    /// Convert the operand to an owned big number
    ///
    /// # Errors
    ///
    /// `BignumError::Conversion` for a NaN or infinite double.
    pub fn coerce(&self) -> Result<BigNumber, BignumError> {
        match self {
            Numeric::Double(d) => BigNumber::from_f64(*d),
            Numeric::UnsignedFixed(u) => Ok(BigNumber::from_u64(*u)),
            Numeric::SignedFixed(i) => Ok(BigNumber::from_i64(*i)),
            Numeric::Big(b) => Ok((*b).clone()),
        }
    }

    /// Whether the operand denotes zero once coerced
    ///
    /// A double counts as zero when its truncation is zero, so `0.5` and
    /// `-0.0` are both zero divisors. NaN and infinities are not zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Numeric::Double(d) => d.is_finite() && d.trunc() == 0.0,
            Numeric::UnsignedFixed(u) => *u == 0,
            Numeric::SignedFixed(i) => *i == 0,
            Numeric::Big(b) => b.is_zero(),
        }
    }
}

impl From<f64> for Numeric<'_> {
    fn from(value: f64) -> Self {
        Numeric::Double(value)
    }
}

impl From<u64> for Numeric<'_> {
    fn from(value: u64) -> Self {
        Numeric::UnsignedFixed(value)
    }
}

impl From<i64> for Numeric<'_> {
    fn from(value: i64) -> Self {
        Numeric::SignedFixed(value)
    }
}

impl<'a> From<&'a BigNumber> for Numeric<'a> {
    fn from(value: &'a BigNumber) -> Self {
        Numeric::Big(value)
    }
}
