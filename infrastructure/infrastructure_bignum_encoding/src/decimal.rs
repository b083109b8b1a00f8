//! Decimal Rendering Module
//!
//! Renders big numbers in base 10 with a leading `-` for negative values.
//!
//! Rendering is attempted into a fixed 32-byte stack buffer first, which
//! covers every value up to about 100 bits. Longer renderings fall back to a
//! heap buffer whose capacity is estimated from the bit length, so large
//! values are produced in a single allocation.

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

use std::fmt::{self, Write};

use entities_utilities::BigNumber;

/// Size of the stack buffer tried before allocating
pub const STACK_BUFFER_LEN: usize = 32;

/// Which buffer a rendering went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    /// Fit in the fixed stack buffer
    Stack,
    /// Needed a dynamically sized buffer
    Heap,
}

/// Fixed-capacity buffer that refuses writes past its end
struct StackBuffer {
    bytes: [u8; STACK_BUFFER_LEN],
    len: usize,
}

impl StackBuffer {
    fn new() -> Self {
        Self {
            bytes: [0; STACK_BUFFER_LEN],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Only whole `&str` fragments are ever copied in
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl fmt::Write for StackBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > STACK_BUFFER_LEN {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Decimal renderer
pub struct DecimalRenderer;

impl DecimalRenderer {
    /// Render `value` as a decimal string
    pub fn render(value: &BigNumber) -> String {
        let mut out = String::new();
        Self::render_into(value, &mut out);
        out
    }

    /// Append the decimal rendering of `value` to `out`
    ///
    /// Returns the buffer the rendering went through.
    pub fn render_into(value: &BigNumber, out: &mut String) -> RenderPath {
        let mut stack = StackBuffer::new();
        if write!(stack, "{}", value).is_ok() {
            out.push_str(stack.as_str());
            return RenderPath::Stack;
        }

        out.reserve(Self::estimated_len(value));
        // Writing into a String cannot fail
        let _ = write!(out, "{}", value);
        RenderPath::Heap
    }

    /// Upper bound on the rendered length, sign included
    pub fn estimated_len(value: &BigNumber) -> usize {
        let bits = value.significant_bits() as f64;
        (bits * std::f64::consts::LOG10_2).ceil() as usize + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_use_stack() {
        let mut out = String::new();
        assert_eq!(
            DecimalRenderer::render_into(&BigNumber::from_i64(-42), &mut out),
            RenderPath::Stack
        );
        assert_eq!(out, "-42");
        assert_eq!(DecimalRenderer::render(&BigNumber::zero()), "0");
    }

    #[test]
    fn test_boundary_of_stack_buffer() {
        let fits = "9".repeat(STACK_BUFFER_LEN);
        let v: BigNumber = fits.parse().unwrap();
        let mut out = String::new();
        assert_eq!(DecimalRenderer::render_into(&v, &mut out), RenderPath::Stack);
        assert_eq!(out, fits);

        let overflows = format!("-{}", fits);
        let v: BigNumber = overflows.parse().unwrap();
        let mut out = String::new();
        assert_eq!(DecimalRenderer::render_into(&v, &mut out), RenderPath::Heap);
        assert_eq!(out, overflows);
    }

    #[test]
    fn test_appends_to_existing_buffer() {
        let mut out = String::from("value=");
        DecimalRenderer::render_into(&BigNumber::from_i64(7), &mut out);
        assert_eq!(out, "value=7");
    }

    #[test]
    fn test_estimate_is_upper_bound() {
        for text in ["1", "-1", "99999999999999999999", "-123456789012345678901234567890123"] {
            let v: BigNumber = text.parse().unwrap();
            assert!(DecimalRenderer::estimated_len(&v) >= text.len(), "{}", text);
        }
    }
}
