//! Integration tests for usecases_bifs
//!
//! Exercises the arithmetic, bitwise, bit mutator and comparison functions
//! together, including property-based checks of the division identities.

use std::cmp::Ordering;

use entities_utilities::{BigNumber, BignumError, ErrorKind, Numeric};
use proptest::prelude::*;
use usecases_bifs::{ArithBif, BitsBif, BitwiseBif, CompareBif};

fn n(v: i64) -> BigNumber {
    BigNumber::from_i64(v)
}

fn power_of_two(exp: i64) -> BigNumber {
    let mut v = BigNumber::zero();
    BitsBif::set_bit(&mut v, exp).unwrap();
    v
}

#[test]
fn test_sum_scenario() {
    let ten = Numeric::Double(10.0).coerce().unwrap();
    assert_eq!(ArithBif::add(&ten, &[Numeric::Double(20.0)]).unwrap(), n(30));
}

#[test]
fn test_division_scenario() {
    assert_eq!(ArithBif::div(&n(-7), &[Numeric::SignedFixed(2)]).unwrap(), n(-3));
    assert_eq!(ArithBif::div_floor(&n(-7), &[Numeric::SignedFixed(2)]).unwrap(), n(-4));
}

#[test]
fn test_set_bit_scenario() {
    let mut v = Numeric::UnsignedFixed(0).coerce().unwrap();
    BitsBif::set_bit(&mut v, 3).unwrap();
    assert_eq!(v, n(8));
}

#[test]
fn test_large_operands_chain() {
    let two_200 = power_of_two(200);
    let two_100 = power_of_two(100);

    let q = ArithBif::div(&two_200, &[Numeric::Big(&two_100), Numeric::Big(&two_100)]).unwrap();
    assert_eq!(q, n(1));

    let sum = ArithBif::add(&two_200, &[Numeric::Big(&two_200)]).unwrap();
    assert_eq!(sum, power_of_two(201));

    let masked = BitwiseBif::and(&sum, &[Numeric::Big(&two_200)]).unwrap();
    assert!(masked.is_zero());
}

#[test]
fn test_operands_are_not_mutated() {
    let x = n(12);
    let y = n(5);
    let _ = ArithBif::mul(&x, &[Numeric::Big(&y)]).unwrap();
    let _ = BitwiseBif::xor(&x, &[Numeric::Big(&y)]).unwrap();
    assert_eq!(x, n(12));
    assert_eq!(y, n(5));
}

#[test]
fn test_error_kinds() {
    let x = n(1);
    assert_eq!(
        ArithBif::rem(&x, &[Numeric::UnsignedFixed(0)]).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
    assert_eq!(ArithBif::sub(&x, &[]).unwrap_err().kind(), ErrorKind::Type);
    assert_eq!(
        BitsBif::clear_bit(&mut n(1), -3).unwrap_err().kind(),
        ErrorKind::Range
    );
    assert_eq!(
        ArithBif::sub_reflected(&x, f64::INFINITY).unwrap_err().kind(),
        ErrorKind::Type
    );
}

#[test]
fn test_compare_with_coerced_operands() {
    let x = power_of_two(70);
    assert_eq!(
        CompareBif::compare(&x, &Numeric::UnsignedFixed(u64::MAX)).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        CompareBif::compare(&x, &Numeric::Double(2f64.powi(70))).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_zero_divisor_error_is_exact() {
    let zero = BigNumber::zero();
    assert_eq!(
        ArithBif::div_floor(&n(9), &[Numeric::Big(&zero)]),
        Err(BignumError::DivideByZero)
    );
}

fn big_strategy() -> impl Strategy<Value = BigNumber> {
    (any::<i128>(), 0u32..3).prop_map(|(v, shift)| {
        let base: BigNumber = v.to_string().parse().unwrap();
        let mut scale = BigNumber::from_i64(1);
        for _ in 0..shift {
            scale = scale.times(&BigNumber::from_u64(u64::MAX));
        }
        base.times(&scale)
    })
}

proptest! {
    #[test]
    fn prop_truncating_identity(x in big_strategy(), y in big_strategy()) {
        prop_assume!(!y.is_zero());
        let q = ArithBif::div(&x, &[Numeric::Big(&y)]).unwrap();
        let r = ArithBif::rem(&x, &[Numeric::Big(&y)]).unwrap();
        prop_assert_eq!(q.times(&y).plus(&r), x.clone());
        prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
    }

    #[test]
    fn prop_flooring_identity(x in big_strategy(), y in big_strategy()) {
        prop_assume!(!y.is_zero());
        let q = ArithBif::div_floor(&x, &[Numeric::Big(&y)]).unwrap();
        let r = ArithBif::rem_floor(&x, &[Numeric::Big(&y)]).unwrap();
        prop_assert_eq!(q.times(&y).plus(&r), x);
        prop_assert!(r.is_zero() || r.is_negative() == y.is_negative());
    }

    #[test]
    fn prop_fixed_fast_paths_match_big(x in big_strategy(), d in any::<i64>(), u in any::<u64>()) {
        prop_assume!(d != 0 && u != 0);
        let bd = BigNumber::from_i64(d);
        let bu = BigNumber::from_u64(u);
        let signed = [Numeric::SignedFixed(d)];
        let signed_big = [Numeric::Big(&bd)];
        let unsigned = [Numeric::UnsignedFixed(u)];
        let unsigned_big = [Numeric::Big(&bu)];

        prop_assert_eq!(ArithBif::div(&x, &signed), ArithBif::div(&x, &signed_big));
        prop_assert_eq!(ArithBif::div_floor(&x, &signed), ArithBif::div_floor(&x, &signed_big));
        prop_assert_eq!(ArithBif::rem(&x, &signed), ArithBif::rem(&x, &signed_big));
        prop_assert_eq!(ArithBif::rem_floor(&x, &signed), ArithBif::rem_floor(&x, &signed_big));
        prop_assert_eq!(ArithBif::div_floor(&x, &unsigned), ArithBif::div_floor(&x, &unsigned_big));
        prop_assert_eq!(ArithBif::rem_floor(&x, &unsigned), ArithBif::rem_floor(&x, &unsigned_big));
    }

    #[test]
    fn prop_compare_antisymmetric(x in big_strategy(), y in big_strategy()) {
        let xy = CompareBif::compare(&x, &Numeric::Big(&y)).unwrap();
        let yx = CompareBif::compare(&y, &Numeric::Big(&x)).unwrap();
        prop_assert_eq!(xy, yx.reverse());
        prop_assert_eq!(CompareBif::compare(&x, &Numeric::Big(&x)).unwrap(), Ordering::Equal);
    }

    #[test]
    fn prop_bit_mutators(x in big_strategy(), index in 0i64..512) {
        let mut v = x.clone();
        BitsBif::set_bit(&mut v, index).unwrap();
        prop_assert_eq!(BitsBif::test_bit(&v, index).unwrap(), 1);
        BitsBif::clear_bit(&mut v, index).unwrap();
        prop_assert_eq!(BitsBif::test_bit(&v, index).unwrap(), 0);

        let mut w = x.clone();
        BitsBif::complement_bit(&mut w, index).unwrap();
        BitsBif::complement_bit(&mut w, index).unwrap();
        prop_assert_eq!(w, x);
    }

    #[test]
    fn prop_not_is_negate_minus_one(x in big_strategy()) {
        let expected = x.negate().minus(&BigNumber::from_i64(1));
        prop_assert_eq!(BitwiseBif::not(&x), expected);
    }
}
