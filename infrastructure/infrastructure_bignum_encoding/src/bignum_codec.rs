//! Bignum Codec Module
//!
//! Import and export of big number magnitudes as raw unsigned big-endian
//! bytes. There is no length prefix and no sign byte: exporting a negative
//! value yields the bytes of its absolute value, and callers that need the
//! sign must carry it separately.
//!
//! ## Laws
//!
//! - `import_bytes(&export_bytes(v)) == abs(v)`
//! - `export_bytes(&import_bytes(b))` is `b` with leading zero bytes removed
//! - zero exports as the empty byte sequence, and the empty sequence imports
//!   as zero

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

use entities_utilities::BigNumber;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::Natural;

/// Bits per exported digit
const BYTE_BITS: u64 = 8;

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Interpret `bytes` as the unsigned big-endian magnitude of a
    /// non-negative integer
    ///
    /// Every byte is significant, including embedded and leading zeros.
    pub fn import_bytes(bytes: &[u8]) -> BigNumber {
        let magnitude = <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(
            BYTE_BITS,
            bytes.iter().copied(),
        )
        .unwrap_or(Natural::ZERO);
        BigNumber::from(magnitude)
    }

    /// Emit the minimal-length unsigned big-endian magnitude of `value`
    ///
    /// The sign is discarded.
    pub fn export_bytes(value: &BigNumber) -> Vec<u8> {
        let count = Self::exported_len(value);
        let mut out = Vec::with_capacity(count);
        out.extend(<Natural as PowerOf2Digits<u8>>::to_power_of_2_digits_desc(
            &value.magnitude(),
            BYTE_BITS,
        ));
        out
    }

    /// Number of bytes `export_bytes` produces: `ceil(bit_length / 8)`
    pub fn exported_len(value: &BigNumber) -> usize {
        let bits = value.significant_bits();
        ((bits + BYTE_BITS - 1) / BYTE_BITS) as usize
    }
}
