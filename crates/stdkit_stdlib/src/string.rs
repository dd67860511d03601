//! String functions.

use stdkit_foundation::{Array, Error, Result, Type, Value};

use crate::args::single;

/// String: chomp - drops one trailing line terminator from a string, or from
/// every string in an array
pub fn native_chomp(args: &[Value]) -> Result<Value> {
    match single("chomp", args)? {
        Value::String(s) => Ok(Value::from(chomp(s))),
        Value::Vec(v) => Ok(Value::Vec(
            v.iter()
                .map(|item| match item {
                    Value::String(s) => Value::from(chomp(s)),
                    other => other.clone(),
                })
                .collect::<Array>(),
        )),
        other => Err(
            Error::type_mismatch("value", Type::String, other.value_type()).in_function("chomp"),
        ),
    }
}

/// Predicate: is_upcase - true when a string has no lowercase letters left to convert
pub fn native_is_upcase(args: &[Value]) -> Result<Value> {
    match single("is_upcase", args)? {
        Value::String(s) => Ok(Value::Bool(s.to_uppercase() == **s)),
        other => {
            Err(Error::type_mismatch("value", Type::String, other.value_type())
                .in_function("is_upcase"))
        }
    }
}

fn chomp(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .or_else(|| s.strip_suffix('\r'))
        .unwrap_or(s)
}
