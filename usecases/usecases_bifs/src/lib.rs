//! Use Cases Layer: Big Number Built-in Functions
//!
//! Provides the operations of the big number engine. Each operation takes a
//! big number receiver and, for the variadic forms, a list of numeric
//! operands that are coerced one at a time.
//!
//! ## Modules
//!
//! - **[`arith`](arith/index.html)**: Addition, subtraction, multiplication,
//!   truncating and flooring division and remainder, reflected forms
//! - **[`bitwise`](bitwise/index.html)**: AND, OR, XOR and complement
//! - **[`bits`](bits/index.html)**: Indexed bit set, clear, complement and test
//! - **[`compare`](compare/index.html)**: Three-way comparison
//!
//! ## Architecture
//!
//! This crate depends on the Entities layer for `BigNumber` and `Numeric`.
//! Results are exposed to host code through the dispatcher and the API
//! Facades layer.

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

pub mod arith;
pub mod bits;
pub mod bitwise;
pub mod compare;

pub use arith::ArithBif;
pub use bits::BitsBif;
pub use bitwise::BitwiseBif;
pub use compare::CompareBif;
