//! Integration tests for parameter errors
//!
//! How errors render for the host and how they are classified.

use stdkit_foundation::{Arity, Error, ErrorKind, Type};

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn arity_message() {
    let err = Error::arity_mismatch(Arity::Range(2, 3), 1).in_function("range");
    assert_eq!(
        err.to_string(),
        "range(): wrong number of arguments: expected 2..3, got 1"
    );
}

#[test]
fn type_message_uses_host_names() {
    let err = Error::type_mismatch("value", Type::Array, Type::Hash).in_function("first");
    assert_eq!(err.to_string(), "first(): value must be array, got hash");
}

#[test]
fn invalid_argument_message() {
    let err = Error::invalid_argument("start must not be an empty string").in_function("range");
    assert_eq!(
        err.to_string(),
        "range(): invalid argument: start must not be an empty string"
    );
}

#[test]
fn unattributed_error_has_no_prefix() {
    let err = Error::range_violation("start (3) must not be greater than stop (1)");
    assert_eq!(err.to_string(), "start (3) must not be greater than stop (1)");
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn parameter_error_taxonomy() {
    assert!(Error::arity_mismatch(Arity::Exact(1), 0).is_parameter_error());
    assert!(Error::type_mismatch("start", Type::Scalar, Type::Undef).is_parameter_error());
    assert!(Error::invalid_argument("bad").is_parameter_error());
    assert!(Error::range_violation("bad").is_parameter_error());
    assert!(!Error::undefined_function("frobnicate").is_parameter_error());
}

#[test]
fn type_mismatch_fields() {
    let err = Error::type_mismatch("step", Type::Integer, Type::Float);
    let ErrorKind::TypeMismatch {
        argument,
        expected,
        actual,
    } = err.kind
    else {
        panic!("expected TypeMismatch");
    };
    assert_eq!((argument, expected, actual), ("step", Type::Integer, Type::Float));
}

// =============================================================================
// Call Trace
// =============================================================================

#[test]
fn trace_starts_empty() {
    assert!(Error::undefined_function("x").trace.frames.is_empty());
}

#[test]
fn trace_survives_question_mark() {
    fn inner() -> stdkit_foundation::Result<()> {
        Err(Error::range_violation("step must not be negative, got -1").with_frame("range"))
    }

    fn outer() -> stdkit_foundation::Result<()> {
        inner().map_err(|err| err.with_frame("outer"))?;
        Ok(())
    }

    let err = outer().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RangeViolation(_)));
    assert_eq!(err.trace.to_string(), "range() <- outer()");
}
