//! Infrastructure Layer: Method Dispatcher
//!
//! Maps host method calls onto the big number use cases. A host runtime sees
//! a big number as an opaque value with a table of named methods; this crate
//! owns that table and the conversion of host arguments into operands.
//!
//! ## Modules
//!
//! - **[`term`](term/index.html)**: Host values and their runtime type names
//!
//! - **[`operator`](operator/index.html)**: The operator table, its fixed
//!   enumeration order and per-operator arity
//!
//! - **[`dispatcher`](dispatcher/index.html)**: `call_method`, which resolves
//!   a name, validates arity and the receiver, and invokes the use case
//!
//! ## Architecture
//!
//! Dispatch is a `match` over the closed [`Operator`] enum; there is no
//! runtime registration. This crate depends on:
//! - `usecases_bifs` for the operations themselves
//! - `entities_utilities` for `BigNumber`, `Numeric` and `BignumError`
//!
//! ## See Also
//!
//! - [`usecases_bifs`](../../usecases/usecases_bifs/index.html): Operation implementations
//! - [`api_facades`](../../api_facades/index.html): Host-facing functions built on this crate

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

pub mod dispatcher;
pub mod operator;
pub mod term;

pub use dispatcher::{call_method, call_operator};
pub use operator::{Arity, Operator};
pub use term::HostValue;
