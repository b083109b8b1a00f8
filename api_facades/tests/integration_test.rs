//! Integration tests for api_facades
//!
//! Host-level scenarios that cross every layer: construction, dispatch,
//! in-place bit mutation, byte strings and rendering.

use api_facades::*;
use proptest::prelude::*;

fn host_str(s: &str) -> HostValue {
    HostValue::String(s.as_bytes().to_vec())
}

fn render(value: &HostValue) -> String {
    let mut out = String::new();
    if let HostValue::Mpz(v) = value {
        tostring(v, &mut out);
    }
    out
}

#[test]
fn test_sum_of_host_numbers() {
    let x = mpz(&HostValue::Number(10.0)).unwrap();
    let sum = call("+", &[x, HostValue::Number(20.0)]).unwrap();
    assert_eq!(render(&sum), "30");
}

#[test]
fn test_hex_string_construction() {
    assert_eq!(render(&mpz(&host_str("0x1A")).unwrap()), "26");
    assert_eq!(render(&mpz(&host_str("-0b101")).unwrap()), "-5");
    assert_eq!(render(&mpz(&host_str("017")).unwrap()), "15");
}

#[test]
fn test_division_scenario() {
    let x = mpz(&HostValue::Number(-7.0)).unwrap();
    let two = HostValue::S64(2);
    assert_eq!(render(&call("/", &[x.clone(), two.clone()]).unwrap()), "-3");
    assert_eq!(render(&call("div", &[x, two]).unwrap()), "-4");
}

#[test]
fn test_setbit_on_fresh_zero() {
    let mut v = mpz(&HostValue::U64(0)).unwrap();
    setbit(&mut v, &HostValue::Number(3.0)).unwrap();
    assert_eq!(render(&v), "8");
}

#[test]
fn test_byte_string_round_trip() {
    let v = mpz(&HostValue::Number(256.0)).unwrap();
    let bytes = export_str(&v).unwrap();
    assert_eq!(bytes, HostValue::String(vec![1, 0]));
    assert_eq!(import_str(&bytes).unwrap(), v);
}

#[test]
fn test_large_rendering() {
    let mut v = mpz(&HostValue::Number(0.0)).unwrap();
    setbit(&mut v, &HostValue::Number(4096.0)).unwrap();
    let text = render(&v);
    assert_eq!(text.len(), 1234);
    assert!(text.starts_with("1044388881413152506691752710716624382579"));
    assert!(text.ends_with("3154190336"));
}

#[test]
fn test_method_hooks() {
    let mut names = Vec::new();
    let mut key = next_method(None);
    while let Some(k) = key {
        assert!(get_method(&k).is_some());
        names.push(k.clone());
        key = next_method(Some(&k));
    }
    assert_eq!(names.len(), Operator::ALL.len());
    assert_eq!(names.first(), Some(&HostValue::Keyword("+".into())));
    assert_eq!(names.last(), Some(&HostValue::Keyword("compare".into())));
}

#[test]
fn test_errors_surface_with_kinds() {
    let x = mpz(&HostValue::Number(1.0)).unwrap();
    assert_eq!(
        call("%", &[x.clone(), HostValue::U64(0)]).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
    assert_eq!(call("+", &[x]).unwrap_err().kind(), ErrorKind::Type);
    assert_eq!(mpz(&host_str("0x")).unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn test_init_with_defaults() {
    assert_eq!(init(&DebugConfig::default()), Ok(false));
}

proptest! {
    #[test]
    fn prop_decimal_text_round_trip(v in any::<i128>()) {
        let text = v.to_string();
        let value = mpz(&host_str(&text)).unwrap();
        prop_assert_eq!(render(&value), text);
    }

    #[test]
    fn prop_compare_matches_ordering(a in any::<i64>(), b in any::<i64>()) {
        let x = mpz(&HostValue::S64(a)).unwrap();
        let result = call("compare", &[x, HostValue::S64(b)]).unwrap();
        let expected = match a.cmp(&b) {
            std::cmp::Ordering::Less => -1.0,
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => 1.0,
        };
        prop_assert_eq!(result, HostValue::Number(expected));
    }
}
