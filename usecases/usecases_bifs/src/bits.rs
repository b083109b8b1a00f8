//! Bit Mutator Built-in Functions
//!
//! Indexed set, clear, complement and test over the two's complement view of
//! a big number. Bit 0 is the least significant bit.
//!
//! The three mutators are the only operations that change a big number in
//! place. They take `&mut BigNumber`, so the caller must hold the value
//! exclusively: a number that is borrowed as an operand elsewhere cannot be
//! mutated at the same time. Indices beyond the current storage grow the
//! value as needed, up to [`BitsBif::MAX_GROWTH_INDEX`].

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

use entities_utilities::{BigNumber, BignumError};
use tracing::trace;

/// Bit mutator built-in functions
pub struct BitsBif;

impl BitsBif {
    /// Highest index a mutator may grow a value to
    ///
    /// Setting a bit above the value's storage on a non-negative value, or
    /// clearing one on a negative value, extends the storage to `index` bits.
    /// Indices at or above 2^32 (512 MiB of storage) are rejected for those
    /// cases. Mutations that leave the value unchanged, or that stay within
    /// the existing storage, are not limited.
    pub const MAX_GROWTH_INDEX: u64 = 1 << 32;

    /// Set bit `index` to one
    ///
    /// # Errors
    /// * `BignumError::BitIndex` - If `index` is negative, exceeds `usize`, or
    ///   would grow the value beyond [`Self::MAX_GROWTH_INDEX`]
    pub fn set_bit(value: &mut BigNumber, index: i64) -> Result<(), BignumError> {
        let index = Self::growth_index(value, index, true)?;
        trace!(op = "setbit", index, "mutating in place");
        value.set_bit(index);
        Ok(())
    }

    /// Clear bit `index` to zero
    pub fn clear_bit(value: &mut BigNumber, index: i64) -> Result<(), BignumError> {
        let index = Self::growth_index(value, index, false)?;
        trace!(op = "clrbit", index, "mutating in place");
        value.clear_bit(index);
        Ok(())
    }

    /// Flip bit `index`
    pub fn complement_bit(value: &mut BigNumber, index: i64) -> Result<(), BignumError> {
        let target = !value.get_bit(Self::bit_index(index)?);
        let index = Self::growth_index(value, index, target)?;
        trace!(op = "combit", index, "mutating in place");
        value.complement_bit(index);
        Ok(())
    }

    /// Read bit `index`, returning 0 or 1
    pub fn test_bit(value: &BigNumber, index: i64) -> Result<u8, BignumError> {
        let index = Self::bit_index(index)?;
        Ok(u8::from(value.get_bit(index)))
    }

    /// Validate a bit index against the platform's addressing type
    pub fn bit_index(index: i64) -> Result<u64, BignumError> {
        usize::try_from(index)
            .map(|i| i as u64)
            .map_err(|_| BignumError::BitIndex {
                index: index.to_string(),
            })
    }

    /// Validate an index for a mutation that writes `target` into the bit
    fn growth_index(value: &BigNumber, index: i64, target: bool) -> Result<u64, BignumError> {
        let checked = Self::bit_index(index)?;
        let grows = checked >= value.significant_bits() && value.get_bit(checked) != target;
        if grows && checked >= Self::MAX_GROWTH_INDEX {
            return Err(BignumError::BitIndex {
                index: index.to_string(),
            });
        }
        Ok(checked)
    }
}
