//! Arithmetic Built-in Functions
//!
//! Provides the variadic arithmetic operations on big numbers:
//! - Addition, subtraction, multiplication
//! - Truncating division and remainder (`/`, `%`)
//! - Flooring division and remainder (`div`, `mod`)
//! - Reflected forms, where the receiver is the right-hand side
//!
//! Every variadic operation folds its operands left to right over a fresh
//! accumulator: `x op y1 op y2 ... op yn`. The receiver and the operands are
//! never mutated.
//!
//! Division by a fixed-width operand runs on `i128` words while the
//! accumulator fits in an `i64`.
//!
//! ## Division conventions
//!
//! | Operation | Quotient rounds | Remainder sign |
//! |-----------|-----------------|----------------|
//! | `div` / `rem` | toward zero | dividend |
//! | `div_floor` / `rem_floor` | toward negative infinity | divisor |
//!
//! A negative signed fixed-width divisor is handled by dividing by its
//! magnitude and correcting the result, so `i64::MIN` never has to be negated
//! in 64 bits.

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

use entities_utilities::{BigNumber, BignumError, Numeric};
use tracing::{debug, trace};

/// Arithmetic built-in functions
pub struct ArithBif;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rounding {
    Truncate,
    Floor,
}

impl ArithBif {
    /// Addition: `x + y1 + ... + yn`
    pub fn add(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("+", x, operands, |acc, y| with_big(y, |y| acc.plus(y)))
    }

    /// Subtraction: `x - y1 - ... - yn`
    pub fn sub(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("-", x, operands, |acc, y| with_big(y, |y| acc.minus(y)))
    }

    /// Multiplication: `x * y1 * ... * yn`
    pub fn mul(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("*", x, operands, |acc, y| with_big(y, |y| acc.times(y)))
    }

    /// Truncating division: `x / y1 / ... / yn`, each quotient rounded toward zero
    ///
    /// # Errors
    /// * `BignumError::DivideByZero` - If any divisor is zero
    /// * `BignumError::Conversion` - If a double operand is NaN or infinite
    pub fn div(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("/", x, operands, |acc, y| divide(acc, y, Rounding::Truncate))
    }

    /// Flooring division: each quotient rounded toward negative infinity
    pub fn div_floor(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("div", x, operands, |acc, y| divide(acc, y, Rounding::Floor))
    }

    /// Truncating remainder; the result takes the sign of the dividend
    pub fn rem(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("%", x, operands, |acc, y| remainder(acc, y, Rounding::Truncate))
    }

    /// Flooring remainder; the result takes the sign of the divisor or is zero
    pub fn rem_floor(x: &BigNumber, operands: &[Numeric<'_>]) -> Result<BigNumber, BignumError> {
        fold_operands("mod", x, operands, |acc, y| remainder(acc, y, Rounding::Floor))
    }

    /// Reflected subtraction: `y - x`
    pub fn sub_reflected(x: &BigNumber, y: f64) -> Result<BigNumber, BignumError> {
        trace!(op = "r-", "reflected operation");
        let y = reflected_operand(y)?;
        Ok(y.minus(x))
    }

    /// Reflected truncating division: `y / x`
    ///
    /// The receiver is the divisor, so a zero receiver is a division by zero.
    pub fn div_reflected(x: &BigNumber, y: f64) -> Result<BigNumber, BignumError> {
        trace!(op = "r/", "reflected operation");
        let y = reflected_dividend(x, y)?;
        y.div_trunc(x).ok_or(BignumError::DivideByZero)
    }

    /// Reflected flooring division: `floor(y / x)`
    pub fn div_floor_reflected(x: &BigNumber, y: f64) -> Result<BigNumber, BignumError> {
        trace!(op = "rdiv", "reflected operation");
        let y = reflected_dividend(x, y)?;
        y.div_floor(x).ok_or(BignumError::DivideByZero)
    }

    /// Reflected truncating remainder: `y % x`
    pub fn rem_reflected(x: &BigNumber, y: f64) -> Result<BigNumber, BignumError> {
        trace!(op = "r%", "reflected operation");
        let y = reflected_dividend(x, y)?;
        y.rem_trunc(x).ok_or(BignumError::DivideByZero)
    }

    /// Reflected flooring remainder: `y mod x`
    pub fn rem_floor_reflected(x: &BigNumber, y: f64) -> Result<BigNumber, BignumError> {
        trace!(op = "rmod", "reflected operation");
        let y = reflected_dividend(x, y)?;
        y.rem_floor(x).ok_or(BignumError::DivideByZero)
    }
}

/// Fold `operands` into a copy of `x` from left to right
///
/// Requires at least one operand. A failing step reports the operand's
/// position in the full argument list (the receiver is position 0); the
/// partially computed accumulator is dropped.
pub(crate) fn fold_operands<F>(
    name: &'static str,
    x: &BigNumber,
    operands: &[Numeric<'_>],
    mut step: F,
) -> Result<BigNumber, BignumError>
where
    F: FnMut(&BigNumber, &Numeric<'_>) -> Result<BigNumber, BignumError>,
{
    if operands.is_empty() {
        return Err(BignumError::Arity {
            name,
            expected: "at least 2",
            got: 1,
        });
    }
    trace!(op = name, arity = operands.len() + 1, "folding operands");

    let mut acc = x.clone();
    for (i, y) in operands.iter().enumerate() {
        acc = step(&acc, y).map_err(|e| {
            let e = e.at_position(i + 1);
            debug!(op = name, position = i + 1, operand = y.type_name(), error = %e, "operand rejected");
            e
        })?;
    }
    Ok(acc)
}

/// Run `f` on the operand as a big number
///
/// Big operands are used by reference; every other case is coerced first.
pub(crate) fn with_big<R>(
    y: &Numeric<'_>,
    f: impl FnOnce(&BigNumber) -> R,
) -> Result<R, BignumError> {
    match y {
        Numeric::Big(b) => Ok(f(b)),
        other => Ok(f(&other.coerce()?)),
    }
}

/// A fixed-width operand widened to `i128`
fn word_operand(y: &Numeric<'_>) -> Option<i128> {
    match y {
        Numeric::UnsignedFixed(d) => Some(i128::from(*d)),
        Numeric::SignedFixed(d) => Some(i128::from(*d)),
        _ => None,
    }
}

/// Quotient on machine words, when the dividend fits in an `i64` and the
/// divisor is fixed-width
fn word_quotient(acc: &BigNumber, y: &Numeric<'_>, rounding: Rounding) -> Option<BigNumber> {
    let d = word_operand(y)?;
    let a = i128::from(acc.to_i64()?);
    let q = a.checked_div(d)?;
    let q = match rounding {
        Rounding::Floor if a % d != 0 && (a < 0) != (d < 0) => q - 1,
        _ => q,
    };
    Some(BigNumber::from_i128(q))
}

/// Remainder on machine words, see [`word_quotient`]
fn word_remainder(acc: &BigNumber, y: &Numeric<'_>, rounding: Rounding) -> Option<BigNumber> {
    let d = word_operand(y)?;
    let a = i128::from(acc.to_i64()?);
    let r = a.checked_rem(d)?;
    let r = match rounding {
        Rounding::Floor if r != 0 && (r < 0) != (d < 0) => r + d,
        _ => r,
    };
    Some(BigNumber::from_i128(r))
}

fn divide(acc: &BigNumber, y: &Numeric<'_>, rounding: Rounding) -> Result<BigNumber, BignumError> {
    if y.is_zero() {
        return Err(BignumError::DivideByZero);
    }
    if let Some(q) = word_quotient(acc, y, rounding) {
        return Ok(q);
    }
    let quotient = match y {
        Numeric::SignedFixed(d) if *d < 0 => {
            let magnitude = BigNumber::from_u64(d.unsigned_abs());
            // floor(x / -m) == -ceil(x / m)
            let q = match rounding {
                Rounding::Truncate => acc.div_trunc(&magnitude),
                Rounding::Floor => acc.div_ceil(&magnitude),
            };
            q.map(|q| q.negate())
        }
        _ => with_big(y, |d| match rounding {
            Rounding::Truncate => acc.div_trunc(d),
            Rounding::Floor => acc.div_floor(d),
        })?,
    };
    quotient.ok_or(BignumError::DivideByZero)
}

fn remainder(
    acc: &BigNumber,
    y: &Numeric<'_>,
    rounding: Rounding,
) -> Result<BigNumber, BignumError> {
    if y.is_zero() {
        return Err(BignumError::DivideByZero);
    }
    if let Some(r) = word_remainder(acc, y, rounding) {
        return Ok(r);
    }
    let rem = match y {
        Numeric::SignedFixed(d) if *d < 0 => {
            let magnitude = BigNumber::from_u64(d.unsigned_abs());
            match rounding {
                // x rem -m == x rem m
                Rounding::Truncate => acc.rem_trunc(&magnitude),
                Rounding::Floor => acc.rem_floor(&magnitude).map(|r| {
                    if r.is_zero() {
                        r
                    } else {
                        r.minus(&magnitude)
                    }
                }),
            }
        }
        _ => with_big(y, |d| match rounding {
            Rounding::Truncate => acc.rem_trunc(d),
            Rounding::Floor => acc.rem_floor(d),
        })?,
    };
    rem.ok_or(BignumError::DivideByZero)
}

fn reflected_operand(y: f64) -> Result<BigNumber, BignumError> {
    BigNumber::from_f64(y).map_err(|e| e.at_position(1))
}

fn reflected_dividend(divisor: &BigNumber, y: f64) -> Result<BigNumber, BignumError> {
    if divisor.is_zero() {
        return Err(BignumError::DivideByZero);
    }
    reflected_operand(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_utilities::ErrorKind;

    fn n(v: i64) -> BigNumber {
        BigNumber::from_i64(v)
    }

    #[test]
    fn test_add_mixed_operands() {
        let x = n(10);
        let big = n(1000);
        let result = ArithBif::add(
            &x,
            &[
                Numeric::Double(20.9),
                Numeric::UnsignedFixed(5),
                Numeric::SignedFixed(-3),
                Numeric::Big(&big),
            ],
        )
        .unwrap();
        assert_eq!(result, n(1032));
        assert_eq!(x, n(10));
    }

    #[test]
    fn test_sub_and_mul_left_to_right() {
        let x = n(100);
        assert_eq!(
            ArithBif::sub(&x, &[Numeric::SignedFixed(30), Numeric::UnsignedFixed(20)]).unwrap(),
            n(50)
        );
        assert_eq!(
            ArithBif::sub(&x, &[Numeric::SignedFixed(i64::MIN)]).unwrap().to_string(),
            "9223372036854775908"
        );
        assert_eq!(
            ArithBif::mul(&x, &[Numeric::SignedFixed(-2), Numeric::Double(3.0)]).unwrap(),
            n(-600)
        );
    }

    #[test]
    fn test_arity_error() {
        let err = ArithBif::add(&n(1), &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(matches!(err, BignumError::Arity { got: 1, .. }));
    }

    #[test]
    fn test_truncating_vs_flooring() {
        let x = n(-7);
        let two = [Numeric::SignedFixed(2)];
        assert_eq!(ArithBif::div(&x, &two).unwrap(), n(-3));
        assert_eq!(ArithBif::div_floor(&x, &two).unwrap(), n(-4));
        assert_eq!(ArithBif::rem(&x, &two).unwrap(), n(-1));
        assert_eq!(ArithBif::rem_floor(&x, &two).unwrap(), n(1));
    }

    #[test]
    fn test_negative_fixed_divisor_matches_big_path() {
        for x in [-9i64, -7, -6, -1, 0, 1, 6, 7, 9] {
            for d in [-4i64, -3, -2, -1] {
                let bx = n(x);
                let bd = n(d);
                let fixed = [Numeric::SignedFixed(d)];
                let big = [Numeric::Big(&bd)];
                assert_eq!(ArithBif::div(&bx, &fixed), ArithBif::div(&bx, &big), "{} / {}", x, d);
                assert_eq!(
                    ArithBif::div_floor(&bx, &fixed),
                    ArithBif::div_floor(&bx, &big),
                    "{} div {}",
                    x,
                    d
                );
                assert_eq!(ArithBif::rem(&bx, &fixed), ArithBif::rem(&bx, &big), "{} % {}", x, d);
                assert_eq!(
                    ArithBif::rem_floor(&bx, &fixed),
                    ArithBif::rem_floor(&bx, &big),
                    "{} mod {}",
                    x,
                    d
                );
            }
        }
    }

    #[test]
    fn test_word_divisors_match_big_path() {
        let dividends = [i64::MIN, -1_000_000_007, -7, -1, 0, 1, 7, 1_000_000_007, i64::MAX];
        let divisors = [
            Numeric::SignedFixed(i64::MIN),
            Numeric::SignedFixed(-3),
            Numeric::SignedFixed(-1),
            Numeric::SignedFixed(1),
            Numeric::SignedFixed(4),
            Numeric::UnsignedFixed(3),
            Numeric::UnsignedFixed(u64::MAX),
        ];
        for x in dividends {
            let bx = n(x);
            for d in divisors {
                let bd = d.coerce().unwrap();
                let fixed = [d];
                let big = [Numeric::Big(&bd)];
                assert_eq!(ArithBif::div(&bx, &fixed), ArithBif::div(&bx, &big), "{} / {:?}", x, d);
                assert_eq!(ArithBif::div_floor(&bx, &fixed), ArithBif::div_floor(&bx, &big));
                assert_eq!(ArithBif::rem(&bx, &fixed), ArithBif::rem(&bx, &big));
                assert_eq!(ArithBif::rem_floor(&bx, &fixed), ArithBif::rem_floor(&bx, &big));
            }
        }
        // i64::MIN / -1 leaves the i64 range
        assert_eq!(
            ArithBif::div(&n(i64::MIN), &[Numeric::SignedFixed(-1)]).unwrap().to_string(),
            "9223372036854775808"
        );
    }

    #[test]
    fn test_min_signed_divisor() {
        let x: BigNumber = "-9223372036854775808".parse().unwrap();
        let fixed = [Numeric::SignedFixed(i64::MIN)];
        assert_eq!(ArithBif::div(&x, &fixed).unwrap(), n(1));
        assert_eq!(ArithBif::div_floor(&x, &fixed).unwrap(), n(1));
        assert_eq!(ArithBif::rem(&x, &fixed).unwrap(), n(0));
        assert_eq!(ArithBif::rem_floor(&x, &fixed).unwrap(), n(0));

        let seven = n(7);
        assert_eq!(ArithBif::div_floor(&seven, &fixed).unwrap(), n(-1));
        assert_eq!(
            ArithBif::rem_floor(&seven, &fixed).unwrap().to_string(),
            "-9223372036854775801"
        );
    }

    #[test]
    fn test_division_by_zero_every_form() {
        let x = n(42);
        let zero = BigNumber::zero();
        let zeros = [
            Numeric::Double(0.0),
            Numeric::Double(-0.0),
            Numeric::Double(0.25),
            Numeric::UnsignedFixed(0),
            Numeric::SignedFixed(0),
            Numeric::Big(&zero),
        ];
        for z in zeros.iter() {
            let ops = [*z];
            assert_eq!(ArithBif::div(&x, &ops), Err(BignumError::DivideByZero));
            assert_eq!(ArithBif::div_floor(&x, &ops), Err(BignumError::DivideByZero));
            assert_eq!(ArithBif::rem(&x, &ops), Err(BignumError::DivideByZero));
            assert_eq!(ArithBif::rem_floor(&x, &ops), Err(BignumError::DivideByZero));
        }
    }

    #[test]
    fn test_zero_divisor_later_in_list() {
        let x = n(100);
        let ops = [Numeric::SignedFixed(5), Numeric::UnsignedFixed(0)];
        assert_eq!(ArithBif::div(&x, &ops), Err(BignumError::DivideByZero));
    }

    #[test]
    fn test_nan_operand_reports_position() {
        let x = n(1);
        let err = ArithBif::add(&x, &[Numeric::SignedFixed(1), Numeric::Double(f64::NAN)])
            .unwrap_err();
        assert!(matches!(err, BignumError::Conversion { position: Some(2), .. }));
    }

    #[test]
    fn test_reflected_forms() {
        let x = n(3);
        assert_eq!(ArithBif::sub_reflected(&x, 10.0).unwrap(), n(7));
        assert_eq!(ArithBif::div_reflected(&x, -10.0).unwrap(), n(-3));
        assert_eq!(ArithBif::div_floor_reflected(&x, -10.0).unwrap(), n(-4));
        assert_eq!(ArithBif::rem_reflected(&x, -10.0).unwrap(), n(-1));
        assert_eq!(ArithBif::rem_floor_reflected(&x, -10.0).unwrap(), n(2));
    }

    #[test]
    fn test_reflected_zero_receiver() {
        let zero = BigNumber::zero();
        assert_eq!(ArithBif::div_reflected(&zero, 5.0), Err(BignumError::DivideByZero));
        assert_eq!(ArithBif::div_floor_reflected(&zero, 5.0), Err(BignumError::DivideByZero));
        assert_eq!(ArithBif::rem_reflected(&zero, 5.0), Err(BignumError::DivideByZero));
        assert_eq!(ArithBif::rem_floor_reflected(&zero, 5.0), Err(BignumError::DivideByZero));
        // A zero dividend is fine
        assert_eq!(ArithBif::div_reflected(&n(5), 0.0).unwrap(), BigNumber::zero());
    }
}
