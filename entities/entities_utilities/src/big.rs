//! Big Number Operations
//!
//! Provides the arbitrary precision integer value type used throughout the
//! engine.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! Malachite stores an `Integer` as a sign plus a little-endian limb
//! magnitude, but exposes two's complement semantics for every bitwise
//! operation, so `-1` behaves as an infinite run of one-bits. Zero has a
//! single canonical representation.
//!
//! ## Ownership
//!
//! A `BigNumber` has exactly one owner. Copies are explicit (`clone`). The
//! only in-place mutations are the bit mutators ([`BigNumber::set_bit`],
//! [`BigNumber::clear_bit`], [`BigNumber::complement_bit`]), which take
//! `&mut self`; a value that is borrowed elsewhere (for example as an operand)
//! cannot be mutated through another binding.

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
use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{CeilingDivMod, DivMod, Mod, UnsignedAbs};
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::{FromStringBase, RoundingFrom};
use malachite::base::num::logic::traits::{BitAccess, SignificantBits};
use malachite::base::rounding_modes::RoundingMode;
use malachite::{Integer, Natural};

use crate::error::BignumError;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Integer::ZERO,
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i128
    pub fn from_i128(value: i128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from double (f64)
    ///
    /// The fractional part is discarded (truncation toward zero), matching
    /// the C `double` to `mpz` conversion. Every finite double converts
    /// exactly, including magnitudes far outside the 64-bit range.
    ///
    /// Returns a conversion error for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self, BignumError> {
        if !value.is_finite() {
            return Err(BignumError::Conversion {
                position: None,
                type_name: "number",
                value: value.to_string(),
            });
        }
        let (truncated, _) = Integer::rounding_from(value, RoundingMode::Down);
        Ok(Self { value: truncated })
    }

    /// Parse a textual numeral
    ///
    /// Accepts an optional leading `-`, then either a base prefix (`0x`/`0X`
    /// hexadecimal, `0b`/`0B` binary, a leading `0` for octal) or plain
    /// decimal digits. ASCII whitespace is ignored anywhere in the input.
    ///
    /// # Errors
    ///
    /// `BignumError::Parse` if the input is not UTF-8, has no digits, or
    /// contains a character that is not a digit of the detected base.
    pub fn parse_bytes(input: &[u8]) -> Result<Self, BignumError> {
        let parse_error = || BignumError::Parse {
            input: String::from_utf8_lossy(input).into_owned(),
        };

        let text = std::str::from_utf8(input).map_err(|_| parse_error())?;
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        let (negative, unsigned) = match compact.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, compact.as_str()),
        };

        let (base, digits) = split_base_prefix(unsigned);
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(u32::from(base))) {
            return Err(parse_error());
        }

        let magnitude = Integer::from_string_base(base, &digits.to_ascii_lowercase())
            .ok_or_else(parse_error)?;
        let value = if negative { -magnitude } else { magnitude };
        Ok(Self { value })
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Number of significant bits of the magnitude (zero has none)
    pub fn significant_bits(&self) -> u64 {
        self.value.significant_bits()
    }

    /// Absolute value as a natural number
    pub fn magnitude(&self) -> Natural {
        (&self.value).unsigned_abs()
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Negate: -x
    pub fn negate(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Truncating division: quotient rounded toward zero
    ///
    /// Returns None if dividing by zero
    pub fn div_trunc(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Truncating remainder: takes the sign of the dividend
    ///
    /// Returns None if dividing by zero
    pub fn rem_trunc(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value % &other.value,
        })
    }

    /// Flooring division: quotient rounded toward negative infinity
    ///
    /// Returns None if dividing by zero
    pub fn div_floor(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let (quotient, _) = (&self.value).div_mod(&other.value);
        Some(Self { value: quotient })
    }

    /// Flooring remainder: takes the sign of the divisor, or is zero
    ///
    /// Returns None if dividing by zero
    pub fn rem_floor(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: (&self.value).mod_op(&other.value),
        })
    }

    /// Ceiling division: quotient rounded toward positive infinity
    ///
    /// Returns None if dividing by zero
    pub fn div_ceil(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let (quotient, _) = (&self.value).ceiling_div_mod(&other.value);
        Some(Self { value: quotient })
    }

    /// Bitwise AND: x & y
    pub fn bitand(&self, other: &Self) -> Self {
        Self {
            value: &self.value & &other.value,
        }
    }

    /// Bitwise OR: x | y
    pub fn bitor(&self, other: &Self) -> Self {
        Self {
            value: &self.value | &other.value,
        }
    }

    /// Bitwise XOR: x ^ y
    pub fn bitxor(&self, other: &Self) -> Self {
        Self {
            value: &self.value ^ &other.value,
        }
    }

    /// Bitwise NOT: !x, which equals -x - 1
    pub fn bitnot(&self) -> Self {
        Self {
            value: !&self.value,
        }
    }

    /// Read bit `index` of the two's complement view
    pub fn get_bit(&self, index: u64) -> bool {
        self.value.get_bit(index)
    }

    /// Set bit `index` of the two's complement view, growing storage as needed
    pub fn set_bit(&mut self, index: u64) {
        self.value.set_bit(index);
    }

    /// Clear bit `index` of the two's complement view, growing storage as needed
    pub fn clear_bit(&mut self, index: u64) {
        self.value.clear_bit(index);
    }

    /// Flip bit `index` of the two's complement view
    pub fn complement_bit(&mut self, index: u64) {
        self.value.flip_bit(index);
    }

    /// Compare against a double by exact value (the double is not truncated)
    ///
    /// Returns None if `other` is NaN.
    pub fn partial_cmp_f64(&self, other: f64) -> Option<Ordering> {
        self.value.partial_cmp(&other)
    }

    /// Compare against an unsigned 64-bit integer
    pub fn cmp_u64(&self, other: u64) -> Ordering {
        self.value.partial_cmp(&other).unwrap_or(Ordering::Equal)
    }

    /// Compare against a signed 64-bit integer
    pub fn cmp_i64(&self, other: i64) -> Ordering {
        self.value.partial_cmp(&other).unwrap_or(Ordering::Equal)
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

/// Split a sign-less numeral into its base and digit string
fn split_base_prefix(text: &str) -> (u8, &str) {
    if let Some(rest) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        (2, rest)
    } else if text.len() > 1 && text.starts_with('0') {
        (8, &text[1..])
    } else {
        (10, text)
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for BigNumber {
    type Err = BignumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bytes(s.as_bytes())
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<Natural> for BigNumber {
    fn from(value: Natural) -> Self {
        Self::from_integer(Integer::from(value))
    }
}
