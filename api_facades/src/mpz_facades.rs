//! Big Number Facades
//!
//! The functions an embedding host binds to expose big numbers as an opaque
//! `jmp/mpz` value type:
//!
//! | Host name | Function |
//! |---|---|
//! | `mpz` | [`mpz`] |
//! | `setbit`, `clrbit`, `combit`, `tstbit` | [`setbit`], [`clrbit`], [`combit`], [`tstbit`] |
//! | `import-str`, `export-str` | [`import_str`], [`export_str`] |
//!
//! plus the abstract-type hooks [`get_method`], [`next_method`], [`tostring`]
//! and [`call`]. Ordering between two big numbers is `BigNumber`'s `Ord`.
//!
//! Host values are moved or cloned at this boundary; no shared handles to a
//! big number are ever given out.

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
use infrastructure_bif_dispatcher::{call_method, HostValue, Operator};
use infrastructure_bignum_encoding::{BignumCodec, DecimalRenderer};
use infrastructure_debugging::{DebugConfig, DebugError, DebugUtils};
use tracing::trace;
use usecases_bifs::BitsBif;

/// Apply a diagnostics configuration
///
/// Returns whether a log subscriber was installed by this call.
pub fn init(config: &DebugConfig) -> Result<bool, DebugError> {
    DebugUtils::init(config)
}

/// Construct a big number from a host value
///
/// Accepts numbers (truncated toward zero), strings (decimal or `0x`/`0b`/`0`
/// prefixed), boxed 64-bit integers and existing big numbers, which are
/// copied.
///
/// # Errors
/// * `BignumError::Conversion` - For other host types and non-finite numbers
/// * `BignumError::Parse` - For a malformed string
pub fn mpz(value: &HostValue) -> Result<HostValue, BignumError> {
    let big = match value {
        HostValue::Number(d) => BigNumber::from_f64(*d)?,
        HostValue::String(bytes) => BigNumber::parse_bytes(bytes)?,
        HostValue::S64(i) => BigNumber::from_i64(*i),
        HostValue::U64(u) => BigNumber::from_u64(*u),
        HostValue::Mpz(v) => v.clone(),
        other => return Err(other.conversion_error(None)),
    };
    Ok(HostValue::Mpz(big))
}

/// Set bit `index` of `value` in place
pub fn setbit(value: &mut HostValue, index: &HostValue) -> Result<(), BignumError> {
    let index = bit_index(index)?;
    BitsBif::set_bit(receiver_mut("setbit", value)?, index)
}

/// Clear bit `index` of `value` in place
pub fn clrbit(value: &mut HostValue, index: &HostValue) -> Result<(), BignumError> {
    let index = bit_index(index)?;
    BitsBif::clear_bit(receiver_mut("clrbit", value)?, index)
}

/// Complement bit `index` of `value` in place
pub fn combit(value: &mut HostValue, index: &HostValue) -> Result<(), BignumError> {
    let index = bit_index(index)?;
    BitsBif::complement_bit(receiver_mut("combit", value)?, index)
}

/// Read bit `index` of `value` as the host number 0 or 1
pub fn tstbit(value: &HostValue, index: &HostValue) -> Result<HostValue, BignumError> {
    let big = value.as_mpz().ok_or(BignumError::NotMpz("tstbit"))?;
    let bit = BitsBif::test_bit(big, bit_index(index)?)?;
    Ok(HostValue::Number(f64::from(bit)))
}

/// Build a non-negative big number from the big-endian bytes of a string
///
/// Every byte of the string is a digit, embedded zero bytes included.
pub fn import_str(bytes: &HostValue) -> Result<HostValue, BignumError> {
    match bytes {
        HostValue::String(bytes) => {
            trace!(len = bytes.len(), "import-str");
            Ok(HostValue::Mpz(BignumCodec::import_bytes(bytes)))
        }
        other => Err(other.conversion_error(Some(0))),
    }
}

/// Export the magnitude of a big number as a big-endian byte string
///
/// The sign is not represented.
pub fn export_str(value: &HostValue) -> Result<HostValue, BignumError> {
    let big = value.as_mpz().ok_or(BignumError::NotMpz("export-str"))?;
    let bytes = BignumCodec::export_bytes(big);
    trace!(len = bytes.len(), "export-str");
    Ok(HostValue::String(bytes))
}

/// Append the decimal form of `value` to a host buffer
pub fn tostring(value: &BigNumber, buffer: &mut String) {
    DecimalRenderer::render_into(value, buffer);
}

/// Resolve a method key
///
/// Only keywords name methods.
pub fn get_method(key: &HostValue) -> Option<Operator> {
    match key {
        HostValue::Keyword(name) => Operator::from_name(name),
        _ => None,
    }
}

/// The method key after `key` in table order
///
/// `None` and `nil` yield the first method; the last method and keys that
/// do not name a method yield `None`.
pub fn next_method(key: Option<&HostValue>) -> Option<HostValue> {
    let next = match key {
        None | Some(HostValue::Nil) => Operator::after(None),
        Some(HostValue::Keyword(name)) => Operator::after(Some(name)),
        Some(_) => None,
    }?;
    Some(HostValue::Keyword(next.name().to_string()))
}

/// Invoke a method by name
pub fn call(name: &str, args: &[HostValue]) -> Result<HostValue, BignumError> {
    call_method(name, args)
}

fn receiver_mut<'a>(
    name: &'static str,
    value: &'a mut HostValue,
) -> Result<&'a mut BigNumber, BignumError> {
    value.as_mpz_mut().ok_or(BignumError::NotMpz(name))
}

/// Convert a host index argument
///
/// Numbers must be integral; negative or oversized indices are range errors.
fn bit_index(index: &HostValue) -> Result<i64, BignumError> {
    let out_of_range = |text: String| BignumError::BitIndex { index: text };
    match index {
        HostValue::Number(d) => {
            if d.is_nan() {
                return Err(index.conversion_error(Some(1)));
            }
            if *d < 0.0 || *d >= i64::MAX as f64 {
                return Err(out_of_range(d.to_string()));
            }
            if d.fract() != 0.0 {
                return Err(index.conversion_error(Some(1)));
            }
            Ok(*d as i64)
        }
        HostValue::S64(i) => Ok(*i),
        HostValue::U64(u) => i64::try_from(*u).map_err(|_| out_of_range(u.to_string())),
        other => Err(other.conversion_error(Some(1))),
    }
}
