//! Infrastructure Layer: Bignum Encoding
//!
//! Converts big numbers to and from their external representations.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: Raw unsigned big-endian
//!   byte import and export of magnitudes.
//!
//! - **[`decimal`](decimal/index.html)**: Base 10 rendering with a stack
//!   buffer fast path.
//!
//! ## Architecture
//!
//! This crate depends on the Entities layer for `BigNumber`. Text parsing
//! lives on `BigNumber` itself; this crate only handles the outbound text
//! direction and the binary formats.

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

pub mod bignum_codec;
pub mod decimal;

pub use bignum_codec::BignumCodec;
pub use decimal::{DecimalRenderer, RenderPath};
