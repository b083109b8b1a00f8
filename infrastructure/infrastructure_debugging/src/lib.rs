//! Infrastructure Layer: Debugging
//!
//! Provides the diagnostics configuration for the big number engine.
//!
//! This crate provides:
//! - Process-wide debug and verbose switches
//! - Configuration from `BIGNUM_DEBUG`, `BIGNUM_VERBOSE` and `BIGNUM_LOG`
//! - Installation of a `tracing-subscriber` formatter with an `EnvFilter`

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

pub mod debug_utils;

pub use debug_utils::{DebugConfig, DebugError, DebugUtils};
