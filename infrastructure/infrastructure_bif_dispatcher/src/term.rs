//! Host Values
//!
//! The tagged values an embedding host passes to and receives from the big
//! number engine. Only the numeric cases can be used as operands; the rest
//! exist so that conversion errors can name the offending type.

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

use std::fmt;

use entities_utilities::{BigNumber, BignumError, Numeric};

/// A value owned by the host runtime
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Nil,
    Boolean(bool),
    /// Host number (double)
    Number(f64),
    /// Byte string, not necessarily UTF-8
    String(Vec<u8>),
    Keyword(String),
    /// Boxed signed 64-bit integer
    S64(i64),
    /// Boxed unsigned 64-bit integer
    U64(u64),
    /// Boxed big integer
    Mpz(BigNumber),
}

impl HostValue {
    /// Runtime type name as the host reports it
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Nil => "nil",
            HostValue::Boolean(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::Keyword(_) => "keyword",
            HostValue::S64(_) => "core/s64",
            HostValue::U64(_) => "core/u64",
            HostValue::Mpz(_) => "jmp/mpz",
        }
    }

    /// Borrow the big number inside an `Mpz`
    pub fn as_mpz(&self) -> Option<&BigNumber> {
        match self {
            HostValue::Mpz(v) => Some(v),
            _ => None,
        }
    }

    /// Mutably borrow the big number inside an `Mpz`
    pub fn as_mpz_mut(&mut self) -> Option<&mut BigNumber> {
        match self {
            HostValue::Mpz(v) => Some(v),
            _ => None,
        }
    }

    /// View the value as an operand
    ///
    /// `position` is the value's index in the argument list and is reported
    /// in the error for non-numeric values.
    pub fn as_numeric(&self, position: usize) -> Result<Numeric<'_>, BignumError> {
        match self {
            HostValue::Number(d) => Ok(Numeric::Double(*d)),
            HostValue::S64(i) => Ok(Numeric::SignedFixed(*i)),
            HostValue::U64(u) => Ok(Numeric::UnsignedFixed(*u)),
            HostValue::Mpz(v) => Ok(Numeric::Big(v)),
            other => Err(other.conversion_error(Some(position))),
        }
    }

    /// Conversion error naming this value
    pub fn conversion_error(&self, position: Option<usize>) -> BignumError {
        BignumError::Conversion {
            position,
            type_name: self.type_name(),
            value: self.to_string(),
        }
    }
}

impl From<BigNumber> for HostValue {
    fn from(value: BigNumber) -> Self {
        HostValue::Mpz(value)
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Nil => write!(f, "nil"),
            HostValue::Boolean(b) => write!(f, "{}", b),
            HostValue::Number(d) => write!(f, "{}", d),
            HostValue::String(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
            HostValue::Keyword(k) => write!(f, ":{}", k),
            HostValue::S64(i) => write!(f, "<core/s64 {}>", i),
            HostValue::U64(u) => write!(f, "<core/u64 {}>", u),
            HostValue::Mpz(v) => write!(f, "<jmp/mpz {}>", v),
        }
    }
}
