//! Method Call Dispatcher
//!
//! Routes a host method call, given as an operator name plus an argument
//! list of host values, to exactly one big number use case. The first
//! argument is always the receiver and must be a big number.
//!
//! Argument conversion happens here: numeric host values become borrowed
//! [`Numeric`] operands, so big number arguments are never copied on the
//! way in. Results are returned as fresh host values.

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
use usecases_bifs::{ArithBif, BitwiseBif, CompareBif};

use crate::operator::Operator;
use crate::term::HostValue;

/// Call the method registered under `name`
///
/// # Arguments
/// * `name` - Operator name, e.g. `"+"` or `"rdiv"`
/// * `args` - Receiver followed by the operands
///
/// # Errors
/// * `BignumError::UnknownMethod` - If no operator has that name
/// * any error of [`call_operator`]
pub fn call_method(name: &str, args: &[HostValue]) -> Result<HostValue, BignumError> {
    let op = Operator::from_name(name).ok_or_else(|| {
        debug!(method = name, "unknown method");
        BignumError::UnknownMethod(name.to_string())
    })?;
    call_operator(op, args)
}

/// Invoke `op` on `args`
///
/// # Errors
/// * `BignumError::Arity` - If the argument count does not fit the operator
/// * `BignumError::NotMpz` - If the receiver is not a big number
/// * `BignumError::Conversion` - If an operand is not numeric
/// * `BignumError::DivideByZero` - For a zero divisor
pub fn call_operator(op: Operator, args: &[HostValue]) -> Result<HostValue, BignumError> {
    trace!(method = op.name(), argc = args.len(), "dispatching");
    let result = dispatch(op, args);
    if let Err(err) = &result {
        debug!(method = op.name(), error = %err, "method failed");
    }
    result
}

fn dispatch(op: Operator, args: &[HostValue]) -> Result<HostValue, BignumError> {
    let arity = op.arity();
    if !arity.accepts(args.len()) {
        return Err(BignumError::Arity {
            name: op.name(),
            expected: arity.describe(),
            got: args.len(),
        });
    }
    let x = receiver(op, args)?;

    let value = match op {
        Operator::Add | Operator::AddReflected => ArithBif::add(x, &operands(args)?)?,
        Operator::Sub => ArithBif::sub(x, &operands(args)?)?,
        Operator::Mul | Operator::MulReflected => ArithBif::mul(x, &operands(args)?)?,
        Operator::Div => ArithBif::div(x, &operands(args)?)?,
        Operator::DivFloor => ArithBif::div_floor(x, &operands(args)?)?,
        Operator::Rem => ArithBif::rem(x, &operands(args)?)?,
        Operator::RemFloor => ArithBif::rem_floor(x, &operands(args)?)?,
        Operator::And | Operator::AndReflected => BitwiseBif::and(x, &operands(args)?)?,
        Operator::Or | Operator::OrReflected => BitwiseBif::or(x, &operands(args)?)?,
        Operator::Xor | Operator::XorReflected => BitwiseBif::xor(x, &operands(args)?)?,
        Operator::SubReflected => ArithBif::sub_reflected(x, reflected_operand(args)?)?,
        Operator::DivReflected => ArithBif::div_reflected(x, reflected_operand(args)?)?,
        Operator::DivFloorReflected => {
            ArithBif::div_floor_reflected(x, reflected_operand(args)?)?
        }
        Operator::RemReflected => ArithBif::rem_reflected(x, reflected_operand(args)?)?,
        Operator::RemFloorReflected => {
            ArithBif::rem_floor_reflected(x, reflected_operand(args)?)?
        }
        Operator::Not => BitwiseBif::not(x),
        Operator::Compare => {
            let y = args[1].as_numeric(1)?;
            let ordering = CompareBif::compare(x, &y)?;
            return Ok(HostValue::Number(f64::from(CompareBif::to_sign(ordering))));
        }
    };
    Ok(HostValue::Mpz(value))
}

fn receiver(op: Operator, args: &[HostValue]) -> Result<&BigNumber, BignumError> {
    args.first()
        .and_then(HostValue::as_mpz)
        .ok_or(BignumError::NotMpz(op.name()))
}

/// Operands after the receiver, positions counted from the receiver
fn operands(args: &[HostValue]) -> Result<Vec<Numeric<'_>>, BignumError> {
    args.iter()
        .enumerate()
        .skip(1)
        .map(|(position, arg)| arg.as_numeric(position))
        .collect()
}

/// The host number a reflected operator applies the receiver to
fn reflected_operand(args: &[HostValue]) -> Result<f64, BignumError> {
    match &args[1] {
        HostValue::Number(d) => Ok(*d),
        other => Err(other.conversion_error(Some(1))),
    }
}
