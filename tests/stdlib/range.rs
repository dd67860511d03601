//! Integration tests for range expansion
//!
//! Covers numeric, zero-padded pattern and alphabetic modes plus every
//! parameter error the function can raise.

use stdkit::foundation::{ErrorKind, Type, Value};
use stdkit::stdlib::{FunctionRegistry, StdlibConfig};

fn range(args: &[Value]) -> Result<Vec<String>, stdkit::foundation::Error> {
    let out = FunctionRegistry::new().call("range", args)?;
    Ok(out
        .as_vec()
        .expect("range returns an array")
        .iter()
        .map(|v| v.as_str().expect("range elements are strings").to_string())
        .collect())
}

fn ints(args: &[i64]) -> Vec<Value> {
    args.iter().copied().map(Value::Int).collect()
}

// =============================================================================
// Numeric Mode
// =============================================================================

#[test]
fn one_to_ten() {
    let out = range(&ints(&[1, 10])).unwrap();
    assert_eq!(out, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
}

#[test]
fn one_to_ten_by_two() {
    let out = range(&ints(&[1, 10, 2])).unwrap();
    assert_eq!(out, ["1", "3", "5", "7", "9"]);
}

#[test]
fn zero_padded_pattern() {
    let out = range(&[Value::from("abc1"), Value::from("abc010")]).unwrap();
    let expected: Vec<String> = (1..=10).map(|n| format!("abc{n:03}")).collect();
    assert_eq!(out, expected);
}

#[test]
fn padded_pattern_with_suffix() {
    let out = range(&[Value::from("rack08.dc1"), Value::from("rack10.dc1")]).unwrap();
    assert_eq!(out, ["rack08.dc1", "rack09.dc1", "rack10.dc1"]);
}

#[test]
fn mixed_int_and_string_operands() {
    let out = range(&[Value::Int(3), Value::from("5")]).unwrap();
    assert_eq!(out, ["3", "4", "5"]);
}

#[test]
fn step_given_as_string() {
    let out = range(&[Value::Int(0), Value::Int(9), Value::from("3")]).unwrap();
    assert_eq!(out, ["0", "3", "6", "9"]);
}

#[test]
fn nil_step_means_one() {
    let out = range(&[Value::Int(1), Value::Int(3), Value::Nil]).unwrap();
    assert_eq!(out, ["1", "2", "3"]);
}

// =============================================================================
// Alphabetic Mode
// =============================================================================

#[test]
fn a_to_z() {
    let out = range(&[Value::from("a"), Value::from("z")]).unwrap();
    assert_eq!(out.len(), 26);
    assert_eq!(out.last().map(String::as_str), Some("z"));
}

#[test]
fn a_to_z_by_two() {
    let out = range(&[Value::from("a"), Value::from("z"), Value::Int(2)]).unwrap();
    let expected: Vec<String> = ('a'..='y').step_by(2).map(String::from).collect();
    assert_eq!(out.len(), 13);
    assert_eq!(out, expected);
}

#[test]
fn multi_character_succession() {
    let out = range(&[Value::from("y"), Value::from("ac")]).unwrap();
    assert_eq!(out, ["y", "z", "aa", "ab", "ac"]);
}

#[test]
fn uppercase_succession() {
    let out = range(&[Value::from("AY"), Value::from("BB")]).unwrap();
    assert_eq!(out, ["AY", "AZ", "BA", "BB"]);
}

// =============================================================================
// Argument Shapes
// =============================================================================

#[test]
fn arguments_wrapped_in_one_array() {
    let wrapped = Value::from(vec![Value::Int(1), Value::Int(10), Value::Int(3)]);
    let out = range(&[wrapped]).unwrap();
    assert_eq!(out, ["1", "4", "7", "10"]);
}

#[test]
fn wrapped_arguments_rejected_when_disabled() {
    let registry = FunctionRegistry::with_config(StdlibConfig::strict());
    let wrapped = Value::from(vec![Value::Int(1), Value::Int(10)]);
    let err = registry.call("range", &[wrapped]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { .. }));
}

#[test]
fn repeated_calls_are_identical() {
    let args = [Value::from("web01"), Value::from("web12"), Value::Int(5)];
    assert_eq!(range(&args).unwrap(), range(&args).unwrap());
}

// =============================================================================
// Parameter Errors
// =============================================================================

#[test]
fn descending_numeric_range() {
    let err = range(&ints(&[10, 1])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RangeViolation(_)));
    assert!(err.is_parameter_error());
}

#[test]
fn incompatible_modes() {
    let err = range(&[Value::Int(1), Value::from("z")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RangeViolation(_)));
    assert!(err.to_string().contains("one endpoint is numeric"));
}

#[test]
fn negative_step() {
    let err = range(&ints(&[1, 10, -1])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RangeViolation(_)));
}

#[test]
fn too_few_arguments() {
    let err = range(&[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { actual: 0, .. }));
    let err = range(&ints(&[1])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { actual: 1, .. }));
}

#[test]
fn empty_string_operand() {
    let err = range(&[Value::from(""), Value::from("b")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

#[test]
fn non_scalar_operand() {
    let err = range(&[Value::from(vec![1i64]), Value::Int(2)]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch { argument: "start", actual: Type::Array, .. }
    ));
    let err = range(&[Value::Int(1), Value::Nil]).unwrap_err();
    assert_eq!(err.to_string(), "range(): stop must be number or string, got undef");
}

#[test]
fn float_step() {
    let err = range(&[Value::Int(1), Value::Int(3), Value::Float(2.0)]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch { argument: "step", expected: Type::Integer, .. }
    ));
}

#[test]
fn fractional_step() {
    let err = range(&[Value::Int(1), Value::Int(5), Value::from("0.5")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

#[test]
fn error_message_names_function() {
    let err = range(&ints(&[5, 1])).unwrap_err();
    assert!(err.to_string().starts_with("range(): "));
    assert_eq!(err.trace.frames, ["range"]);
}

// =============================================================================
// Bounded Work
// =============================================================================

#[test]
fn huge_alphabetic_step_fails_fast() {
    let args = [Value::from("a"), Value::from("zzzzzz"), Value::Int(300_000_000)];
    let err = range(&args).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RangeViolation(_)));
}

#[test]
fn huge_numeric_step_is_cheap() {
    let out = range(&ints(&[0, i64::MAX, i64::MAX / 2])).unwrap();
    assert_eq!(out.len(), 3);
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use super::{ints, range};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn numeric_length_matches_span(start in -1000i64..1000, len in 0i64..1000, step in 1i64..50) {
            let out = range(&ints(&[start, start + len, step])).unwrap();
            let expected = usize::try_from(len / step + 1).unwrap();
            prop_assert_eq!(out.len(), expected);
        }

        #[test]
        fn start_is_always_first(start in -1000i64..1000, len in 0i64..100) {
            let out = range(&ints(&[start, start + len])).unwrap();
            prop_assert_eq!(out[0].parse::<i64>().unwrap(), start);
        }
    }
}
