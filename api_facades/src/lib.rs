//! API Facades Layer
//!
//! Provides the host-facing surface of the big number engine: construction,
//! bit functions, byte import/export, and the hooks a host runtime calls on
//! an opaque `jmp/mpz` value (method lookup, method enumeration, string
//! conversion, method calls).
//!
//! All facades call underlying Rust modules from inner layers.

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

pub mod mpz_facades;

pub use mpz_facades::*;

// Re-export the types that appear in facade signatures
pub use entities_utilities::{BigNumber, BignumError, ErrorKind};
pub use infrastructure_bif_dispatcher::{HostValue, Operator};
pub use infrastructure_debugging::{DebugConfig, DebugError};
