//! Bitwise Built-in Functions
//!
//! AND, OR, XOR and complement over the infinite two's complement view of
//! big numbers: a negative value has an unbounded run of one-bits above its
//! most significant bit, so `-1 & y == y` for every `y`.

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

use entities_utilities::{BigNumber, BignumError, Numeric};
use tracing::trace;

use crate::arith::{fold_operands, with_big};

/// Bitwise built-in functions
pub struct BitwiseBif;

impl BitwiseBif {
    /// Bitwise AND: `x & y1 & ... & yn`
    pub fn and(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("&", x, operands, |acc, y| with_big(y, |y| acc.bitand(y)))
    }

    /// Bitwise OR: `x | y1 | ... | yn`
    pub fn or(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("|", x, operands, |acc, y| with_big(y, |y| acc.bitor(y)))
    }

    /// Bitwise XOR: `x ^ y1 ^ ... ^ yn`
    pub fn xor(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("^", x, operands, |acc, y| with_big(y, |y| acc.bitxor(y)))
    }

    /// Complement: `~x == -x - 1`
    pub fn not(x: &BigNumber) -> BigNumber {
        trace!(op = "~", "unary operation");
        x.bitnot()
    }
}
