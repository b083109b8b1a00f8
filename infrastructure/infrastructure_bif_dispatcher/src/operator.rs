//! Operator Table
//!
//! The named methods a big number exposes to its host. The table order is
//! fixed and is the order in which [`Operator::after`] enumerates names.
//!
//! Every binary operator has a reflected `r`-prefixed twin that the host
//! invokes when the big number is the right-hand operand. For commutative
//! operators the twin is the same operation.

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

/// A host-visible big number method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    AddReflected,
    Sub,
    SubReflected,
    Mul,
    MulReflected,
    /// Truncating division
    Div,
    DivReflected,
    /// Flooring division
    DivFloor,
    DivFloorReflected,
    /// Truncating remainder
    Rem,
    RemReflected,
    /// Flooring remainder
    RemFloor,
    RemFloorReflected,
    And,
    AndReflected,
    Or,
    OrReflected,
    Xor,
    XorReflected,
    Not,
    Compare,
}

/// Accepted argument counts, receiver included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The receiver alone
    Unary,
    /// The receiver and one operand
    Binary,
    /// The receiver and one or more operands
    Variadic,
}

impl Arity {
    /// Whether `count` arguments are accepted
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Unary => count == 1,
            Arity::Binary => count == 2,
            Arity::Variadic => count >= 2,
        }
    }

    /// Description used in arity errors
    pub fn describe(self) -> &'static str {
        match self {
            Arity::Unary => "exactly 1",
            Arity::Binary => "exactly 2",
            Arity::Variadic => "at least 2",
        }
    }
}

impl Operator {
    /// Every operator, in table order
    pub const ALL: [Operator; 22] = [
        Operator::Add,
        Operator::AddReflected,
        Operator::Sub,
        Operator::SubReflected,
        Operator::Mul,
        Operator::MulReflected,
        Operator::Div,
        Operator::DivReflected,
        Operator::DivFloor,
        Operator::DivFloorReflected,
        Operator::Rem,
        Operator::RemReflected,
        Operator::RemFloor,
        Operator::RemFloorReflected,
        Operator::And,
        Operator::AndReflected,
        Operator::Or,
        Operator::OrReflected,
        Operator::Xor,
        Operator::XorReflected,
        Operator::Not,
        Operator::Compare,
    ];

    /// Host-visible method name
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::AddReflected => "r+",
            Operator::Sub => "-",
            Operator::SubReflected => "r-",
            Operator::Mul => "*",
            Operator::MulReflected => "r*",
            Operator::Div => "/",
            Operator::DivReflected => "r/",
            Operator::DivFloor => "div",
            Operator::DivFloorReflected => "rdiv",
            Operator::Rem => "%",
            Operator::RemReflected => "r%",
            Operator::RemFloor => "mod",
            Operator::RemFloorReflected => "rmod",
            Operator::And => "&",
            Operator::AndReflected => "r&",
            Operator::Or => "|",
            Operator::OrReflected => "r|",
            Operator::Xor => "^",
            Operator::XorReflected => "r^",
            Operator::Not => "~",
            Operator::Compare => "compare",
        }
    }

    /// Resolve a method name
    pub fn from_name(name: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// Argument counts the operator accepts
    pub fn arity(self) -> Arity {
        match self {
            Operator::Not => Arity::Unary,
            Operator::SubReflected
            | Operator::DivReflected
            | Operator::DivFloorReflected
            | Operator::RemReflected
            | Operator::RemFloorReflected
            | Operator::Compare => Arity::Binary,
            _ => Arity::Variadic,
        }
    }

    /// The operator following `name` in table order
    ///
    /// `None` yields the first operator. The last operator and names that are
    /// not in the table yield `None`.
    pub fn after(name: Option<&str>) -> Option<Operator> {
        match name {
            None => Self::ALL.first().copied(),
            Some(name) => {
                let index = Self::ALL.iter().position(|op| op.name() == name)?;
                Self::ALL.get(index + 1).copied()
            }
        }
    }
}
