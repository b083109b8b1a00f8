//! Error Kinds
//!
//! Every fallible big number operation reports a [`BignumError`]. Errors are
//! grouped into four kinds that embedding hosts map onto their own error
//! classes:
//!
//! - **Type**: an operand is not coercible, sits in the wrong position, or the
//!   operation was called with the wrong number of arguments
//! - **Parse**: a textual numeral is malformed
//! - **DivideByZero**: any division or remainder with a zero divisor
//! - **Range**: a bit index is outside the addressable domain

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

use thiserror::Error;

/// Coarse classification of a [`BignumError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand type, position or arity error
    Type,
    /// Malformed textual numeral
    Parse,
    /// Zero divisor
    DivideByZero,
    /// Bit index out of range
    Range,
}

/// Big number operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BignumError {
    /// Operand cannot be converted to an integer
    ///
    /// `position` is the operand's index in the argument list (the receiver
    /// is position 0), when the failing value came from an argument list.
    #[error("cannot convert {type_name} {value} to integer{}", position_suffix(.position))]
    Conversion {
        position: Option<usize>,
        type_name: &'static str,
        value: String,
    },

    /// Wrong number of arguments
    #[error("{name} expects {expected} arguments, got {got}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// The receiver of a method is not a big integer
    #[error("{0} method requires jmp/mpz as first argument")]
    NotMpz(&'static str),

    /// No operator is registered under the given name
    #[error("unknown method {0:?}")]
    UnknownMethod(String),

    /// Malformed textual numeral
    #[error("invalid integer literal {input:?}")]
    Parse { input: String },

    /// Division or remainder by zero
    #[error("division by zero")]
    DivideByZero,

    /// Bit index outside the addressable domain
    #[error("bit index {index} out of range")]
    BitIndex { index: String },
}

impl BignumError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BignumError::Conversion { .. }
            | BignumError::Arity { .. }
            | BignumError::NotMpz(_)
            | BignumError::UnknownMethod(_) => ErrorKind::Type,
            BignumError::Parse { .. } => ErrorKind::Parse,
            BignumError::DivideByZero => ErrorKind::DivideByZero,
            BignumError::BitIndex { .. } => ErrorKind::Range,
        }
    }

    /// Attach an argument position to a conversion error
    ///
    /// Other error variants are returned unchanged.
    pub fn at_position(self, position: usize) -> Self {
        match self {
            BignumError::Conversion {
                type_name, value, ..
            } => BignumError::Conversion {
                position: Some(position),
                type_name,
                value,
            },
            other => other,
        }
    }
}

fn position_suffix(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" (argument {})", p),
        None => String::new(),
    }
}
